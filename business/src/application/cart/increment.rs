use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::write_lock::CartWriteLocks;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStorage;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::increment::{
    IncrementQuantityParams, IncrementQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct IncrementQuantityUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub locks: Arc<CartWriteLocks>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IncrementQuantityUseCase for IncrementQuantityUseCaseImpl {
    async fn execute(&self, params: IncrementQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Incrementing menu item {} in cart of restaurant {}",
            params.menu_item_id, params.restaurant_id
        ));

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
        store
            .apply(|cart| cart.increment(&params.menu_item_id))
            .await
            .inspect_err(|e| {
                self.logger.warn(&format!(
                    "Could not increment menu item {}: {}",
                    params.menu_item_id, e
                ))
            })?;

        Ok(store.into_cart())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
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

    fn params(menu_item_id: &str) -> IncrementQuantityParams {
        IncrementQuantityParams {
            session_id: SessionId::generate(),
            restaurant_id: RestaurantId::from("r1"),
            menu_item_id: MenuItemId::from(menu_item_id),
        }
    }

    #[tokio::test]
    async fn should_increment_quantity_from_one_to_two() {
        let mut storage = MockStorage::new();
        storage.expect_get_item().returning(|_, _| {
            Ok(Some(
                r#"[{"_id":"m1","name":"Burger","price":9,"quantity":1}]"#.to_string(),
            ))
        });
        storage
            .expect_set_item()
            .withf(|_, _, value| value == r#"[{"_id":"m1","name":"Burger","price":9,"quantity":2}]"#)
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = IncrementQuantityUseCaseImpl {
            storage: Arc::new(storage),
            locks: Arc::new(CartWriteLocks::new()),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params("m1")).await.unwrap();

        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[tokio::test]
    async fn should_return_not_found_for_item_outside_cart() {
        let mut storage = MockStorage::new();
        storage.expect_get_item().returning(|_, _| Ok(None));
        storage.expect_set_item().never();

        let use_case = IncrementQuantityUseCaseImpl {
            storage: Arc::new(storage),
            locks: Arc::new(CartWriteLocks::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("m1")).await;

        assert!(matches!(result, Err(CartError::ItemNotFound)));
    }

    #[tokio::test]
    async fn should_not_persist_when_quantity_is_at_maximum() {
        let mut storage = MockStorage::new();
        storage.expect_get_item().returning(|_, _| {
            Ok(Some(
                r#"[{"_id":"m1","name":"Burger","price":9,"quantity":4294967295}]"#.to_string(),
            ))
        });
        storage.expect_set_item().never();

        let use_case = IncrementQuantityUseCaseImpl {
            storage: Arc::new(storage),
            locks: Arc::new(CartWriteLocks::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("m1")).await;

        assert!(matches!(result, Err(CartError::InvalidQuantity)));
    }
}
