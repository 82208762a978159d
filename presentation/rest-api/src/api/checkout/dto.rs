use poem_openapi::Object;

use business::domain::checkout::model::{CheckoutSession, DeliveryDetails};

/// Delivery form. Every field is required.
#[derive(Debug, Clone, Object)]
pub struct DeliveryDetailsRequest {
    #[oai(validator(min_length = 3, max_length = 254))]
    pub email: String,
    #[oai(validator(min_length = 1))]
    pub name: String,
    #[oai(validator(min_length = 1))]
    pub address_line1: String,
    #[oai(validator(min_length = 1))]
    pub city: String,
    #[oai(validator(min_length = 1))]
    pub country: String,
}

impl From<DeliveryDetailsRequest> for DeliveryDetails {
    fn from(request: DeliveryDetailsRequest) -> Self {
        Self {
            email: request.email,
            name: request.name,
            address_line1: request.address_line1,
            city: request.city,
            country: request.country,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    pub delivery_details: DeliveryDetailsRequest,
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutResponse {
    /// Hosted payment page to redirect the browser to
    pub url: String,
}

impl From<CheckoutSession> for CheckoutResponse {
    fn from(session: CheckoutSession) -> Self {
        Self {
            url: session.url.to_string(),
        }
    }
}
