//! Lifecycle tests for the tokenization request controller.

use cardform_client::{
	CardFormController, CardFormDelegate, LifecycleState, Token, TokenError,
};
use cardform_forms::{CardInput, FieldKind, FieldVerdict};
use cardform_mocks::MockTokenService;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct RecordingDelegate {
	succeeded: Mutex<Vec<Token>>,
	failed: Mutex<Vec<TokenError>>,
}

impl RecordingDelegate {
	fn new() -> Arc<Self> {
		Arc::new(Self {
			succeeded: Mutex::new(Vec::new()),
			failed: Mutex::new(Vec::new()),
		})
	}

	fn succeeded_count(&self) -> usize {
		self.succeeded.lock().unwrap().len()
	}

	fn failed_count(&self) -> usize {
		self.failed.lock().unwrap().len()
	}
}

impl CardFormDelegate for RecordingDelegate {
	fn tokenization_succeeded(&self, token: Token) {
		self.succeeded.lock().unwrap().push(token);
	}

	fn tokenization_failed(&self, error: TokenError) {
		self.failed.lock().unwrap().push(error);
	}
}

fn valid_input() -> CardInput {
	CardInput {
		number: "4242 4242 4242 4242".to_string(),
		holder_name: "JOHN DOE".to_string(),
		expiration_month: 4,
		expiration_year: 2099,
		cvv: "123".to_string(),
	}
}

async fn harness() -> (Arc<MockTokenService>, CardFormController, Arc<RecordingDelegate>) {
	let service = Arc::new(MockTokenService::new());
	let controller = CardFormController::new(service.clone());
	let delegate = RecordingDelegate::new();
	let as_dyn: Arc<dyn CardFormDelegate> = delegate.clone();
	controller.set_delegate(Arc::downgrade(&as_dyn)).await;
	(service, controller, delegate)
}

async fn wait_until_idle(controller: &CardFormController) {
	for _ in 0..200 {
		if controller.lifecycle().await == LifecycleState::Idle {
			return;
		}
		tokio::time::sleep(Duration::from_millis(5)).await;
	}
	panic!("controller never returned to idle");
}

#[tokio::test]
async fn test_successful_submit_notifies_delegate_once() {
	// Arrange
	let (service, controller, delegate) = harness().await;

	// Act
	controller.submit(valid_input()).await.unwrap();
	wait_until_idle(&controller).await;

	// Assert: exactly one dispatch, exactly one success, no failure
	assert_eq!(service.dispatched_count().await, 1);
	assert_eq!(delegate.succeeded_count(), 1);
	assert_eq!(delegate.failed_count(), 0);

	let ui = controller.ui_state().await;
	assert!(!ui.busy);
	assert!(ui.form_enabled);
	assert!(ui.error_banner.is_none());
}

#[tokio::test]
async fn test_duplicate_submit_while_in_flight_is_dropped() {
	// Arrange: hold the first request in flight
	let (service, controller, delegate) = harness().await;
	service.set_delay(Duration::from_millis(100)).await;

	// Act: second submit lands while the first is in flight
	controller.submit(valid_input()).await.unwrap();
	assert_eq!(controller.lifecycle().await, LifecycleState::InFlight);
	controller.submit(valid_input()).await.unwrap();
	wait_until_idle(&controller).await;

	// Assert: one dispatched request, one outcome notification
	assert_eq!(service.dispatched_count().await, 1);
	assert_eq!(delegate.succeeded_count(), 1);
	assert_eq!(delegate.failed_count(), 0);
}

#[tokio::test]
async fn test_busy_indicator_tracks_the_in_flight_request() {
	// Arrange
	let (service, controller, _delegate) = harness().await;
	service.set_delay(Duration::from_millis(100)).await;

	// Act
	controller.submit(valid_input()).await.unwrap();
	let during = controller.ui_state().await;
	wait_until_idle(&controller).await;
	let after = controller.ui_state().await;

	// Assert
	assert!(during.busy);
	assert!(!during.form_enabled);
	assert!(!after.busy);
	assert!(after.form_enabled);
}

#[tokio::test]
async fn test_auto_handled_failure_sets_banner_without_delegate_call() {
	// Arrange: auto error handling is the default
	let (service, controller, delegate) = harness().await;
	service.set_fail_next(true).await;

	// Act
	controller.submit(valid_input()).await.unwrap();
	wait_until_idle(&controller).await;

	// Assert: error displayed inline, form kept for correction
	let ui = controller.ui_state().await;
	assert!(ui.error_banner.is_some());
	assert!(ui.form_enabled);
	assert_eq!(delegate.failed_count(), 0);
	assert_eq!(delegate.succeeded_count(), 0);
}

#[tokio::test]
async fn test_manual_mode_forwards_failure_to_delegate() {
	// Arrange
	let (service, controller, delegate) = harness().await;
	controller.set_auto_handle_error(false);
	service.set_fail_next(true).await;

	// Act
	controller.submit(valid_input()).await.unwrap();
	wait_until_idle(&controller).await;

	// Assert: delegate owns display decisions, no banner
	assert_eq!(delegate.failed_count(), 1);
	assert_eq!(delegate.succeeded_count(), 0);
	assert!(controller.ui_state().await.error_banner.is_none());
}

#[tokio::test]
async fn test_outcome_is_exclusive_per_request() {
	// Arrange
	let (service, controller, delegate) = harness().await;
	controller.set_auto_handle_error(false);

	// Act: one failing cycle, one succeeding cycle
	service.set_fail_next(true).await;
	controller.submit(valid_input()).await.unwrap();
	wait_until_idle(&controller).await;
	controller.submit(valid_input()).await.unwrap();
	wait_until_idle(&controller).await;

	// Assert: each request resolved exactly one way
	assert_eq!(service.dispatched_count().await, 2);
	assert_eq!(delegate.failed_count(), 1);
	assert_eq!(delegate.succeeded_count(), 1);
}

#[tokio::test]
async fn test_field_edit_clears_the_error_banner() {
	// Arrange: a failure has left a banner up
	let (service, controller, _delegate) = harness().await;
	service.set_fail_next(true).await;
	controller.submit(valid_input()).await.unwrap();
	wait_until_idle(&controller).await;
	assert!(controller.ui_state().await.error_banner.is_some());

	// Act: any subsequent field edit
	controller
		.record_field(FieldVerdict::valid(FieldKind::Cvv, "456"))
		.await;

	// Assert
	assert!(controller.ui_state().await.error_banner.is_none());
}

#[tokio::test]
async fn test_new_submit_clears_a_prior_banner() {
	// Arrange
	let (service, controller, _delegate) = harness().await;
	service.set_fail_next(true).await;
	controller.submit(valid_input()).await.unwrap();
	wait_until_idle(&controller).await;
	assert!(controller.ui_state().await.error_banner.is_some());

	// Act: the retry starts with a clean banner and succeeds
	controller.submit(valid_input()).await.unwrap();
	wait_until_idle(&controller).await;

	// Assert
	assert!(controller.ui_state().await.error_banner.is_none());
}

#[tokio::test]
async fn test_dismiss_aborts_the_in_flight_request() {
	// Arrange
	let (service, controller, delegate) = harness().await;
	service.set_delay(Duration::from_millis(200)).await;
	controller.submit(valid_input()).await.unwrap();
	assert_eq!(controller.lifecycle().await, LifecycleState::InFlight);

	// Act: let the dispatch reach the service, then dismiss mid-flight
	tokio::time::sleep(Duration::from_millis(50)).await;
	controller.dismiss().await;
	tokio::time::sleep(Duration::from_millis(300)).await;

	// Assert: request was dispatched but no outcome was delivered
	assert_eq!(service.dispatched_count().await, 1);
	assert!(service.issued_tokens().await.is_empty());
	assert_eq!(delegate.succeeded_count(), 0);
	assert_eq!(delegate.failed_count(), 0);
	assert_eq!(controller.lifecycle().await, LifecycleState::Idle);
	assert!(!controller.ui_state().await.busy);
}

#[tokio::test]
async fn test_controller_is_reusable_after_completion() {
	// Arrange
	let (service, controller, delegate) = harness().await;

	// Act: two full submit cycles back to back
	controller.submit(valid_input()).await.unwrap();
	wait_until_idle(&controller).await;
	controller.submit(valid_input()).await.unwrap();
	wait_until_idle(&controller).await;

	// Assert
	assert_eq!(service.dispatched_count().await, 2);
	assert_eq!(delegate.succeeded_count(), 2);
}
