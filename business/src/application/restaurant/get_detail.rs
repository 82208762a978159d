use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartStorage;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::summary::OrderSummary;
use crate::domain::checkout::in_flight::CheckoutInFlight;
use crate::domain::logger::Logger;
use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::services::RestaurantFetcher;
use crate::domain::restaurant::use_cases::get_detail::{
    GetRestaurantDetailParams, GetRestaurantDetailUseCase, RestaurantDetail,
};

pub struct GetRestaurantDetailUseCaseImpl {
    pub restaurants: Arc<dyn RestaurantFetcher>,
    pub storage: Arc<dyn CartStorage>,
    pub in_flight: Arc<CheckoutInFlight>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRestaurantDetailUseCase for GetRestaurantDetailUseCaseImpl {
    async fn execute(
        &self,
        params: GetRestaurantDetailParams,
    ) -> Result<RestaurantDetail, RestaurantError> {
        self.logger.info(&format!(
            "Getting restaurant detail: {}",
            params.restaurant_id
        ));

        let restaurant = self.restaurants.fetch(&params.restaurant_id).await?;
        let cart = CartStore::load(
            self.storage.clone(),
            params.session_id,
            &params.restaurant_id,
        )
        .await?
        .into_cart();

        let summary = OrderSummary::new(&cart, restaurant.delivery_price);
        let checkout_in_progress = self
            .in_flight
            .is_in_progress(params.session_id, &params.restaurant_id);

        self.logger.info(&format!(
            "Restaurant {} has {} menu items, cart holds {} lines",
            restaurant.id,
            restaurant.menu_items.len(),
            cart.len()
        ));
        Ok(RestaurantDetail {
            restaurant,
            cart,
            summary,
            checkout_in_progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::errors::CartError;
    use crate::domain::errors::RepositoryError;
    use crate::domain::restaurant::model::{MenuItem, Restaurant};
    use crate::domain::shared::value_objects::{MenuItemId, RestaurantId, SessionId};
    use mockall::mock;

    mock! {
        pub Storage {}

        #[async_trait]
        impl CartStorage for Storage {
            async fn get_item(&self, session_id: &SessionId, key: &str) -> Result<Option<String>, RepositoryError>;
            async fn set_item(&self, session_id: &SessionId, key: &str, value: &str) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Restaurants {}

        #[async_trait]
        impl RestaurantFetcher for Restaurants {
            async fn fetch(&self, restaurant_id: &RestaurantId) -> Result<Restaurant, RestaurantError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn burger_barn() -> Restaurant {
        Restaurant {
            id: RestaurantId::from("r1"),
            restaurant_name: "Burger Barn".to_string(),
            city: "London".to_string(),
            country: "United Kingdom".to_string(),
            delivery_price: 250,
            estimated_delivery_time: 30,
            cuisines: vec!["Burgers".to_string()],
            menu_items: vec![MenuItem {
                id: MenuItemId::from("m1"),
                name: "Burger".to_string(),
                price: 900,
            }],
            image_url: "https://img.example.com/r1.png".to_string(),
            last_updated: None,
        }
    }

    fn params(session_id: SessionId) -> GetRestaurantDetailParams {
        GetRestaurantDetailParams {
            session_id,
            restaurant_id: RestaurantId::from("r1"),
        }
    }

    #[tokio::test]
    async fn should_combine_menu_cart_and_totals() {
        let mut restaurants = MockRestaurants::new();
        restaurants.expect_fetch().returning(|_| Ok(burger_barn()));
        let mut storage = MockStorage::new();
        storage.expect_get_item().returning(|_, _| {
            Ok(Some(
                r#"[{"_id":"m1","name":"Burger","price":900,"quantity":2}]"#.to_string(),
            ))
        });

        let use_case = GetRestaurantDetailUseCaseImpl {
            restaurants: Arc::new(restaurants),
            storage: Arc::new(storage),
            in_flight: Arc::new(CheckoutInFlight::new()),
            logger: mock_logger(),
        };

        let detail = use_case
            .execute(params(SessionId::generate()))
            .await
            .unwrap();

        assert_eq!(detail.restaurant.restaurant_name, "Burger Barn");
        assert_eq!(detail.cart.len(), 1);
        assert_eq!(detail.summary.subtotal, 1800);
        assert_eq!(detail.summary.total, 2050);
        assert!(!detail.checkout_in_progress);
    }

    #[tokio::test]
    async fn should_expose_checkout_loading_flag() {
        let mut restaurants = MockRestaurants::new();
        restaurants.expect_fetch().returning(|_| Ok(burger_barn()));
        let mut storage = MockStorage::new();
        storage.expect_get_item().returning(|_, _| Ok(None));
        let in_flight = Arc::new(CheckoutInFlight::new());
        let session_id = SessionId::generate();
        let _running = in_flight.try_begin(session_id, &RestaurantId::from("r1"));

        let use_case = GetRestaurantDetailUseCaseImpl {
            restaurants: Arc::new(restaurants),
            storage: Arc::new(storage),
            in_flight,
            logger: mock_logger(),
        };

        let detail = use_case.execute(params(session_id)).await.unwrap();

        assert!(detail.checkout_in_progress);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_restaurant() {
        let mut restaurants = MockRestaurants::new();
        restaurants
            .expect_fetch()
            .returning(|_| Err(RestaurantError::NotFound));

        let use_case = GetRestaurantDetailUseCaseImpl {
            restaurants: Arc::new(restaurants),
            storage: Arc::new(MockStorage::new()),
            in_flight: Arc::new(CheckoutInFlight::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(SessionId::generate())).await;

        assert!(matches!(result, Err(RestaurantError::NotFound)));
    }

    #[tokio::test]
    async fn should_report_corrupted_cart() {
        let mut restaurants = MockRestaurants::new();
        restaurants.expect_fetch().returning(|_| Ok(burger_barn()));
        let mut storage = MockStorage::new();
        storage
            .expect_get_item()
            .returning(|_, _| Ok(Some("{}".to_string())));

        let use_case = GetRestaurantDetailUseCaseImpl {
            restaurants: Arc::new(restaurants),
            storage: Arc::new(storage),
            in_flight: Arc::new(CheckoutInFlight::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(SessionId::generate())).await;

        assert!(matches!(
            result,
            Err(RestaurantError::Cart(CartError::CorruptedStorage))
        ));
    }
}
