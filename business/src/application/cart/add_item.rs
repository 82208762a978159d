use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::write_lock::CartWriteLocks;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStorage;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::restaurant::errors::RestaurantError;
use crate::domain::restaurant::services::RestaurantFetcher;

pub struct AddToCartUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub restaurants: Arc<dyn RestaurantFetcher>,
    pub locks: Arc<CartWriteLocks>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding menu item {} to cart of restaurant {}",
            params.menu_item_id, params.restaurant_id
        ));

        // Name and price come from the menu, never from the client.
        let restaurant = self
            .restaurants
            .fetch(&params.restaurant_id)
            .await
            .map_err(|e| match e {
                RestaurantError::NotFound => CartError::RestaurantNotFound,
                _ => CartError::RestaurantUnavailable,
            })?;
        let menu_item = restaurant
            .menu_item(&params.menu_item_id)
            .cloned()
            .ok_or(CartError::MenuItemNotFound)?;

        let _guard = self
            .locks
            .acquire(params.session_id, &params.restaurant_id)
            .await;
        let mut store = CartStore::load(
            self.storage.clone(),
            params.session_id,
            &params.restaurant_id,
        )
        .await?;
        store.apply(|cart| cart.add(&menu_item)).await?;

        self.logger.debug(&format!(
            "Cart of restaurant {} now holds {} lines",
            params.restaurant_id,
            store.cart().len()
        ));
        Ok(store.into_cart())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
            menu_items: vec![
                MenuItem {
                    id: MenuItemId::from("m1"),
                    name: "Burger".to_string(),
                    price: 9,
                },
                MenuItem {
                    id: MenuItemId::from("m2"),
                    name: "Fries".to_string(),
                    price: 3,
                },
            ],
            image_url: "https://img.example.com/r1.png".to_string(),
            last_updated: None,
        }
    }

    fn mock_restaurants() -> MockRestaurants {
        let mut restaurants = MockRestaurants::new();
        restaurants.expect_fetch().returning(|_| Ok(burger_barn()));
        restaurants
    }

    fn params(menu_item_id: &str) -> AddToCartParams {
        AddToCartParams {
            session_id: SessionId::generate(),
            restaurant_id: RestaurantId::from("r1"),
            menu_item_id: MenuItemId::from(menu_item_id),
        }
    }

    #[tokio::test]
    async fn should_add_menu_item_to_empty_cart() {
        let mut storage = MockStorage::new();
        storage.expect_get_item().returning(|_, _| Ok(None));
        storage
            .expect_set_item()
            .withf(|_, key, value| {
                key == "cartItems-r1"
                    && value == r#"[{"_id":"m1","name":"Burger","price":9,"quantity":1}]"#
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = AddToCartUseCaseImpl {
            storage: Arc::new(storage),
            restaurants: Arc::new(mock_restaurants()),
            locks: Arc::new(CartWriteLocks::new()),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params("m1")).await.unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name, "Burger");
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[tokio::test]
    async fn should_bump_quantity_when_item_already_in_cart() {
        let mut storage = MockStorage::new();
        storage.expect_get_item().returning(|_, _| {
            Ok(Some(
                r#"[{"_id":"m1","name":"Burger","price":9,"quantity":1},{"_id":"m2","name":"Fries","price":3,"quantity":1}]"#
                    .to_string(),
            ))
        });
        storage.expect_set_item().times(1).returning(|_, _, _| Ok(()));

        let use_case = AddToCartUseCaseImpl {
            storage: Arc::new(storage),
            restaurants: Arc::new(mock_restaurants()),
            locks: Arc::new(CartWriteLocks::new()),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params("m1")).await.unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[1].id, MenuItemId::from("m2"));
    }

    #[tokio::test]
    async fn should_reject_item_not_on_menu() {
        let mut storage = MockStorage::new();
        storage.expect_set_item().never();

        let use_case = AddToCartUseCaseImpl {
            storage: Arc::new(storage),
            restaurants: Arc::new(mock_restaurants()),
            locks: Arc::new(CartWriteLocks::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("m404")).await;

        assert!(matches!(result, Err(CartError::MenuItemNotFound)));
    }

    #[tokio::test]
    async fn should_report_unknown_restaurant() {
        let mut restaurants = MockRestaurants::new();
        restaurants
            .expect_fetch()
            .returning(|_| Err(RestaurantError::NotFound));

        let use_case = AddToCartUseCaseImpl {
            storage: Arc::new(MockStorage::new()),
            restaurants: Arc::new(restaurants),
            locks: Arc::new(CartWriteLocks::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("m1")).await;

        assert!(matches!(result, Err(CartError::RestaurantNotFound)));
    }

    #[tokio::test]
    async fn should_surface_corrupted_stored_cart() {
        let mut storage = MockStorage::new();
        storage
            .expect_get_item()
            .returning(|_, _| Ok(Some("[{\"_id\":".to_string())));
        storage.expect_set_item().never();

        let use_case = AddToCartUseCaseImpl {
            storage: Arc::new(storage),
            restaurants: Arc::new(mock_restaurants()),
            locks: Arc::new(CartWriteLocks::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("m1")).await;

        assert!(matches!(result, Err(CartError::CorruptedStorage)));
    }
}
