use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::decrement::DecrementQuantityUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::increment::IncrementQuantityUseCaseImpl;
use business::application::cart::remove_item::RemoveFromCartUseCaseImpl;
use business::application::cart::write_lock::CartWriteLocks;
use business::application::checkout::checkout::CheckoutUseCaseImpl;
use business::application::restaurant::get_detail::GetRestaurantDetailUseCaseImpl;
use business::domain::cart::repository::CartStorage;
use business::domain::checkout::errors::CheckoutError;
use business::domain::checkout::in_flight::CheckoutInFlight;
use business::domain::checkout::model::{CheckoutSession, CheckoutSessionRequest};
use business::domain::checkout::services::CheckoutSessionGateway;
use business::domain::restaurant::errors::RestaurantError;
use business::domain::restaurant::model::{MenuItem, Restaurant};
use business::domain::restaurant::services::RestaurantFetcher;
use business::domain::shared::value_objects::{MenuItemId, RestaurantId};
use logger::TracingLogger;
use persistence::session_storage::memory::SessionStorageInMemory;
use tokio_util::sync::CancellationToken;

use crate::api::cart::routes::CartApi;
use crate::api::checkout::routes::CheckoutApi;
use crate::api::restaurant::routes::RestaurantApi;

pub const SESSION_A: &str = "6f1c2a9e-3b1d-4c55-9a7e-0d2b8f4e1a10";
pub const SESSION_B: &str = "0b7d5e21-9c44-4a8f-8e1e-5f3a2c6d7b90";

/// Serves a fixed set of restaurants.
pub struct TestRestaurants(Vec<Restaurant>);

impl TestRestaurants {
    pub fn burger_barn() -> Arc<Self> {
        Arc::new(Self(vec![Restaurant {
            id: RestaurantId::from("r1"),
            restaurant_name: "Burger Barn".to_string(),
            city: "London".to_string(),
            country: "United Kingdom".to_string(),
            delivery_price: 250,
            estimated_delivery_time: 30,
            cuisines: vec!["Burgers".to_string()],
            menu_items: vec![
                MenuItem {
                    id: MenuItemId::from("m1"),
                    name: "Burger".to_string(),
                    price: 900,
                },
                MenuItem {
                    id: MenuItemId::from("m2"),
                    name: "Fries".to_string(),
                    price: 300,
                },
            ],
            image_url: "https://img.example.com/r1.png".to_string(),
            last_updated: None,
        }]))
    }
}

#[async_trait]
impl RestaurantFetcher for TestRestaurants {
    async fn fetch(&self, restaurant_id: &RestaurantId) -> Result<Restaurant, RestaurantError> {
        self.0
            .iter()
            .find(|restaurant| &restaurant.id == restaurant_id)
            .cloned()
            .ok_or(RestaurantError::NotFound)
    }
}

/// Always answers with the same hosted checkout page.
pub struct TestGateway;

#[async_trait]
impl CheckoutSessionGateway for TestGateway {
    async fn create_checkout_session(
        &self,
        _request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        Url::parse("https://checkout.example.com/pay/cs_1")
            .map(|url| CheckoutSession { url })
            .map_err(|_| CheckoutError::InvalidRedirectUrl)
    }
}

/// All APIs wired on one in-memory storage, the way the server wires them.
pub struct TestApis {
    pub cart: CartApi,
    pub restaurant: RestaurantApi,
    pub checkout: CheckoutApi,
}

pub fn test_apis(restaurants: Arc<TestRestaurants>) -> TestApis {
    let storage: Arc<dyn CartStorage> = Arc::new(SessionStorageInMemory::new(Duration::from_secs(60 * 60)));
    let logger = Arc::new(TracingLogger);
    let locks = Arc::new(CartWriteLocks::new());
    let in_flight = Arc::new(CheckoutInFlight::new());

    let cart = CartApi::new(
        Arc::new(GetCartUseCaseImpl {
            storage: storage.clone(),
            logger: logger.clone(),
        }),
        Arc::new(AddToCartUseCaseImpl {
            storage: storage.clone(),
            restaurants: restaurants.clone(),
            locks: locks.clone(),
            logger: logger.clone(),
        }),
        Arc::new(RemoveFromCartUseCaseImpl {
            storage: storage.clone(),
            locks: locks.clone(),
            logger: logger.clone(),
        }),
        Arc::new(IncrementQuantityUseCaseImpl {
            storage: storage.clone(),
            locks: locks.clone(),
            logger: logger.clone(),
        }),
        Arc::new(DecrementQuantityUseCaseImpl {
            storage: storage.clone(),
            locks,
            logger: logger.clone(),
        }),
    );

    let restaurant = RestaurantApi::new(Arc::new(GetRestaurantDetailUseCaseImpl {
        restaurants: restaurants.clone(),
        storage: storage.clone(),
        in_flight: in_flight.clone(),
        logger: logger.clone(),
    }));

    let checkout = CheckoutApi::new(
        Arc::new(CheckoutUseCaseImpl {
            storage,
            restaurants,
            gateway: Arc::new(TestGateway),
            in_flight,
            logger,
        }),
        CancellationToken::new(),
    );

    TestApis {
        cart,
        restaurant,
        checkout,
    }
}

pub fn cart_api(restaurants: Arc<TestRestaurants>) -> CartApi {
    test_apis(restaurants).cart
}
