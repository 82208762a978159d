use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use logger::TracingLogger;
use order_api::checkout_session::CheckoutSessionGatewayHttp;
use order_api::restaurant_fetcher::RestaurantFetcherHttp;
use persistence::session_storage::purge::StaleSessionPurge;

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::decrement::DecrementQuantityUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::increment::IncrementQuantityUseCaseImpl;
use business::application::cart::remove_item::RemoveFromCartUseCaseImpl;
use business::application::cart::write_lock::CartWriteLocks;
use business::application::checkout::checkout::CheckoutUseCaseImpl;
use business::application::restaurant::get_detail::GetRestaurantDetailUseCaseImpl;
use business::domain::checkout::in_flight::CheckoutInFlight;

use crate::api::cart::routes::CartApi;
use crate::api::checkout::routes::CheckoutApi;
use crate::api::health::routes::HealthApi;
use crate::api::restaurant::routes::RestaurantApi;
use crate::api::session::routes::SessionApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub session_api: SessionApi,
    pub restaurant_api: RestaurantApi,
    pub cart_api: CartApi,
    pub checkout_api: CheckoutApi,
    /// Present when the storage backend needs idle sessions purged.
    pub session_purge: Option<Arc<dyn StaleSessionPurge>>,
    /// Cancelled on shutdown, aborting checkouts still waiting on the provider.
    pub shutdown: CancellationToken,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let shutdown = CancellationToken::new();

        // Infrastructure adapters
        let storage = config.storage.init_storage().await?;
        let restaurants = Arc::new(RestaurantFetcherHttp::new(config.order_api.client()?));
        let gateway = Arc::new(CheckoutSessionGatewayHttp::new(config.order_api.client()?));

        // Shared per-process state
        let locks = Arc::new(CartWriteLocks::new());
        let in_flight = Arc::new(CheckoutInFlight::new());

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            storage: storage.storage.clone(),
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddToCartUseCaseImpl {
            storage: storage.storage.clone(),
            restaurants: restaurants.clone(),
            locks: locks.clone(),
            logger: logger.clone(),
        });
        let remove_use_case = Arc::new(RemoveFromCartUseCaseImpl {
            storage: storage.storage.clone(),
            locks: locks.clone(),
            logger: logger.clone(),
        });
        let increment_use_case = Arc::new(IncrementQuantityUseCaseImpl {
            storage: storage.storage.clone(),
            locks: locks.clone(),
            logger: logger.clone(),
        });
        let decrement_use_case = Arc::new(DecrementQuantityUseCaseImpl {
            storage: storage.storage.clone(),
            locks,
            logger: logger.clone(),
        });

        // Restaurant use cases
        let get_detail_use_case = Arc::new(GetRestaurantDetailUseCaseImpl {
            restaurants: restaurants.clone(),
            storage: storage.storage.clone(),
            in_flight: in_flight.clone(),
            logger: logger.clone(),
        });

        // Checkout use cases
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            storage: storage.storage,
            restaurants,
            gateway,
            in_flight,
            logger,
        });

        Ok(Self {
            health_api: HealthApi::new(),
            session_api: SessionApi::new(),
            restaurant_api: RestaurantApi::new(get_detail_use_case),
            cart_api: CartApi::new(
                get_cart_use_case,
                add_use_case,
                remove_use_case,
                increment_use_case,
                decrement_use_case,
            ),
            checkout_api: CheckoutApi::new(checkout_use_case, shutdown.clone()),
            session_purge: storage.purge,
            shutdown,
        })
    }
}
