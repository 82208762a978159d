use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::decrement::{
    DecrementQuantityParams, DecrementQuantityUseCase,
};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::increment::{
    IncrementQuantityParams, IncrementQuantityUseCase,
};
use business::domain::cart::use_cases::remove_item::{
    RemoveFromCartParams, RemoveFromCartUseCase,
};
use business::domain::shared::value_objects::{MenuItemId, RestaurantId};

use crate::api::cart::dto::{AddToCartRequest, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::auth::SessionAuth;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_use_case: Arc<dyn AddToCartUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    increment_use_case: Arc<dyn IncrementQuantityUseCase>,
    decrement_use_case: Arc<dyn DecrementQuantityUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_use_case: Arc<dyn AddToCartUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
        increment_use_case: Arc<dyn IncrementQuantityUseCase>,
        decrement_use_case: Arc<dyn DecrementQuantityUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            remove_use_case,
            increment_use_case,
            decrement_use_case,
        }
    }
}

/// Per-restaurant cart of the current session
///
/// Every mutation answers with the full cart after the change.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the stored cart, or an empty one if nothing was added yet.
    #[oai(
        path = "/restaurants/:restaurant_id/cart",
        method = "get",
        tag = "ApiTags::Cart"
    )]
    async fn get(&self, auth: SessionAuth, restaurant_id: Path<String>) -> CartResult {
        let params = GetCartParams {
            session_id: auth.0,
            restaurant_id: RestaurantId::from(restaurant_id.0),
        };
        CartResult::from_use_case(self.get_use_case.execute(params).await)
    }

    /// Add a menu item
    ///
    /// Appends the item with quantity 1, or bumps the quantity of the
    /// existing line.
    #[oai(
        path = "/restaurants/:restaurant_id/cart/items",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn add_item(
        &self,
        auth: SessionAuth,
        restaurant_id: Path<String>,
        body: Json<AddToCartRequest>,
    ) -> CartResult {
        let params = AddToCartParams {
            session_id: auth.0,
            restaurant_id: RestaurantId::from(restaurant_id.0),
            menu_item_id: MenuItemId::from(body.0.menu_item_id),
        };
        CartResult::from_use_case(self.add_use_case.execute(params).await)
    }

    /// Remove a line
    ///
    /// Removing an item that is not in the cart leaves the cart unchanged.
    #[oai(
        path = "/restaurants/:restaurant_id/cart/items/:menu_item_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        auth: SessionAuth,
        restaurant_id: Path<String>,
        menu_item_id: Path<String>,
    ) -> CartResult {
        let params = RemoveFromCartParams {
            session_id: auth.0,
            restaurant_id: RestaurantId::from(restaurant_id.0),
            menu_item_id: MenuItemId::from(menu_item_id.0),
        };
        CartResult::from_use_case(self.remove_use_case.execute(params).await)
    }

    /// Increase a line quantity by one
    #[oai(
        path = "/restaurants/:restaurant_id/cart/items/:menu_item_id/increment",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn increment(
        &self,
        auth: SessionAuth,
        restaurant_id: Path<String>,
        menu_item_id: Path<String>,
    ) -> CartResult {
        let params = IncrementQuantityParams {
            session_id: auth.0,
            restaurant_id: RestaurantId::from(restaurant_id.0),
            menu_item_id: MenuItemId::from(menu_item_id.0),
        };
        CartResult::from_use_case(self.increment_use_case.execute(params).await)
    }

    /// Decrease a line quantity by one
    ///
    /// A line at quantity 1 is removed.
    #[oai(
        path = "/restaurants/:restaurant_id/cart/items/:menu_item_id/decrement",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn decrement(
        &self,
        auth: SessionAuth,
        restaurant_id: Path<String>,
        menu_item_id: Path<String>,
    ) -> CartResult {
        let params = DecrementQuantityParams {
            session_id: auth.0,
            restaurant_id: RestaurantId::from(restaurant_id.0),
            menu_item_id: MenuItemId::from(menu_item_id.0),
        };
        CartResult::from_use_case(self.decrement_use_case.execute(params).await)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartResult {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartResult {
    fn from_use_case(result: Result<Cart, CartError>) -> Self {
        match result {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CartResult::NotFound(json),
                    422 => CartResult::UnprocessableEntity(json),
                    502 => CartResult::BadGateway(json),
                    _ => CartResult::InternalError(json),
                }
            }
        }
    }
}
