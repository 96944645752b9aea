//! Checkout-session call chains.
//!
//! Each flow is a strict sequence: the identifier returned by one call is an
//! input of the next, and the first failure ends the chain. Nothing is retried
//! and resources created by earlier steps are not rolled back.

use stripe_bridge_core::{
    CheckoutUrl, Mode, Outcome, PriceId, ProductId, SecretKey, SessionError, SessionRequest, Step,
};

use crate::http::StripeApi;
use crate::options::SessionOptions;
use crate::parse::extract_field;

const PRODUCTS_PATH: &str = "/products";
const PRICES_PATH: &str = "/prices";
const CHECKOUT_SESSIONS_PATH: &str = "/checkout/sessions";

/// Runs the Stripe calls behind one payment-session request.
#[derive(Debug, Clone)]
pub struct SessionOrchestrator<A> {
    api: A,
    options: SessionOptions,
}

impl<A: StripeApi> SessionOrchestrator<A> {
    /// Create an orchestrator over a Stripe transport.
    #[must_use]
    pub fn new(api: A, options: SessionOptions) -> Self {
        Self { api, options }
    }

    /// Run the flow selected by the request's mode and return its checkout URL.
    ///
    /// # Errors
    ///
    /// Returns the first error of the chain; later calls are not made.
    pub async fn run(&self, request: &SessionRequest) -> Outcome {
        let outcome = match request.mode() {
            Mode::Subscription => self.subscription(request).await,
            Mode::Payment if self.options.inline_price_data => self.inline_payment(request).await,
            Mode::Payment => self.payment(request).await,
        };

        match &outcome {
            Ok(_) => tracing::info!(mode = %request.mode(), "Checkout session created"),
            Err(e) => tracing::warn!(
                mode = %request.mode(),
                code = e.code(),
                error = %e,
                "Checkout session request failed"
            ),
        }

        outcome
    }

    /// Product, then price, then checkout session.
    async fn payment(&self, request: &SessionRequest) -> Outcome {
        let (currency, amount) = one_time_price(request)?;
        let secret = request.secret_key();

        let product = self.create_product(secret, &self.options.product_name).await?;
        let price = self.create_price(secret, currency, amount, &product).await?;

        let mut form = vec![
            ("line_items[0][price]", price.into_inner()),
            ("line_items[0][quantity]", request.quantity().to_string()),
            ("mode", Mode::Payment.as_str().to_string()),
            ("success_url", request.success_url().to_string()),
        ];
        push_cancel_url(&mut form, request);

        self.create_checkout_session(secret, Step::PaymentLink, &form)
            .await
    }

    /// A single checkout session carrying its own price data.
    async fn inline_payment(&self, request: &SessionRequest) -> Outcome {
        let (currency, amount) = one_time_price(request)?;

        let mut form = vec![
            ("line_items[0][price_data][unit_amount]", amount.to_string()),
            ("line_items[0][price_data][currency]", currency.to_string()),
            (
                "line_items[0][price_data][product_data][name]",
                self.options.product_name.clone(),
            ),
            ("line_items[0][quantity]", request.quantity().to_string()),
            ("mode", Mode::Payment.as_str().to_string()),
            ("success_url", request.success_url().to_string()),
        ];
        push_cancel_url(&mut form, request);

        self.create_checkout_session(request.secret_key(), Step::PaymentLink, &form)
            .await
    }

    /// A single checkout session against an existing price and customer.
    async fn subscription(&self, request: &SessionRequest) -> Outcome {
        let price = request
            .price_id()
            .ok_or_else(|| SessionError::invalid_argument("Please specify price ID"))?;
        let customer = request
            .customer_id()
            .ok_or_else(|| SessionError::invalid_argument("Please specify customer ID"))?;

        let mut form = vec![
            ("line_items[0][price]", price.to_string()),
            ("line_items[0][quantity]", request.quantity().to_string()),
            ("mode", Mode::Subscription.as_str().to_string()),
            ("success_url", request.success_url().to_string()),
            ("customer", customer.to_string()),
        ];
        push_cancel_url(&mut form, request);

        self.create_checkout_session(request.secret_key(), Step::SubscriptionLink, &form)
            .await
    }

    async fn create_product(&self, secret: &SecretKey, name: &str) -> Result<ProductId, SessionError> {
        let form = [("name", name.to_string())];
        let body = self.api.post_form(PRODUCTS_PATH, &form, secret).await?;
        let id = ProductId::new(extract_field(&body, "id", Step::Product)?);

        tracing::debug!(step = %Step::Product, product_id = %id, "Created product");
        Ok(id)
    }

    async fn create_price(
        &self,
        secret: &SecretKey,
        currency: &str,
        amount: i64,
        product: &ProductId,
    ) -> Result<PriceId, SessionError> {
        let form = [
            ("unit_amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("product", product.to_string()),
        ];
        let body = self.api.post_form(PRICES_PATH, &form, secret).await?;
        let id = PriceId::new(extract_field(&body, "id", Step::Price)?);

        tracing::debug!(step = %Step::Price, price_id = %id, "Created price");
        Ok(id)
    }

    async fn create_checkout_session(
        &self,
        secret: &SecretKey,
        step: Step,
        form: &[(&str, String)],
    ) -> Outcome {
        let body = self
            .api
            .post_form(CHECKOUT_SESSIONS_PATH, form, secret)
            .await?;
        let url = CheckoutUrl::new(extract_field(&body, "url", step)?);

        tracing::debug!(step = %step, "Created checkout session");
        Ok(url)
    }
}

/// Currency and amount a one-time payment cannot do without.
fn one_time_price(request: &SessionRequest) -> Result<(&str, i64), SessionError> {
    let currency = request
        .currency()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| SessionError::invalid_argument("Please specify currency"))?;
    let amount = request
        .amount()
        .ok_or_else(|| SessionError::invalid_argument("Please specify amount"))?;
    Ok((currency, amount))
}

fn push_cancel_url(form: &mut Vec<(&str, String)>, request: &SessionRequest) {
    if let Some(cancel_url) = request.cancel_url() {
        form.push(("cancel_url", cancel_url.to_string()));
    }
}
