//! Tokenization request controller.
//!
//! Owns the submit lifecycle: builds a [`TokenizationRequest`] from validated
//! input, enforces at-most-one in-flight request, dispatches it to the
//! [`TokenService`], and resolves exactly one outcome per request back to the
//! delegate while keeping the UI-affecting flags (busy indicator, error
//! banner, form enablement) consistent.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use cardform_forms::{CardForm, CardInput, FieldVerdict};

use crate::service::{TokenService, TokenizationRequest};
use crate::types::error::TokenError;
use crate::types::token::Token;

/// Lifecycle of a submit attempt.
///
/// `Completed` is transient: outcome handling collapses it back to `Idle`
/// inside the same critical section, so observers only ever see `Idle` or
/// `InFlight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
	/// No request outstanding; submit is allowed
	Idle,
	/// A request has been dispatched and its outcome is pending
	InFlight,
	/// An outcome has arrived and is being applied
	Completed,
}

/// UI-affecting flags cached by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
	/// Busy indicator (spinner) while a request is in flight
	pub busy: bool,
	/// Whether the form accepts interaction
	pub form_enabled: bool,
	/// Inline error banner text, if a failure is being displayed
	pub error_banner: Option<String>,
}

impl Default for UiState {
	fn default() -> Self {
		Self {
			busy: false,
			form_enabled: true,
			error_banner: None,
		}
	}
}

/// Caller-facing notification interface.
///
/// Held by the controller as a `Weak` back-reference: the controller never
/// owns its delegate. Each callback fires at most once per submit cycle.
pub trait CardFormDelegate: Send + Sync {
	/// The submitted card data was exchanged for a token.
	fn tokenization_succeeded(&self, token: Token);

	/// The token service reported a failure. Only called when auto error
	/// handling is disabled; otherwise the error is rendered inline.
	fn tokenization_failed(&self, error: TokenError);
}

enum Notification {
	Succeeded(Token),
	Failed(TokenError),
}

struct ControllerState {
	lifecycle: LifecycleState,
	ui: UiState,
	form: CardForm,
	delegate: Option<Weak<dyn CardFormDelegate>>,
	in_flight: Option<JoinHandle<()>>,
}

struct Inner {
	service: Arc<dyn TokenService>,
	auto_handle_error: AtomicBool,
	state: Mutex<ControllerState>,
}

impl Inner {
	/// Applies the outcome of the dispatched request. Runs on the spawned
	/// dispatch task; all state mutation happens under the one state lock,
	/// delegate callbacks run outside it.
	async fn complete(&self, outcome: Result<Token, TokenError>) {
		let delegate;
		let notification;
		{
			let mut state = self.state.lock().await;
			state.lifecycle = LifecycleState::Completed;
			state.in_flight = None;
			state.ui.busy = false;
			state.ui.form_enabled = true;
			delegate = state.delegate.clone();

			notification = match outcome {
				Ok(token) => {
					state.ui.error_banner = None;
					Some(Notification::Succeeded(token))
				}
				Err(err) if self.auto_handle_error.load(Ordering::Relaxed) => {
					tracing::warn!(error = %err, "tokenization failed; displaying inline");
					state.ui.error_banner = Some(err.to_string());
					None
				}
				Err(err) => Some(Notification::Failed(err)),
			};

			// Completed resets to Idle before a new request may start.
			state.lifecycle = LifecycleState::Idle;
		}

		if let Some(notification) = notification
			&& let Some(delegate) = delegate.as_ref().and_then(Weak::upgrade)
		{
			match notification {
				Notification::Succeeded(token) => delegate.tokenization_succeeded(token),
				Notification::Failed(err) => delegate.tokenization_failed(err),
			}
		}
	}
}

/// Controller driving a card entry form's submit lifecycle.
///
/// All state transitions and UI-affecting flags are serialized behind one
/// lock; the token service call is the only asynchronous boundary. Submission
/// is non-blocking: [`CardFormController::submit`] returns as soon as the
/// request is dispatched, and the outcome is applied by the dispatch task.
pub struct CardFormController {
	inner: Arc<Inner>,
}

impl CardFormController {
	/// Creates a controller over the given token service, with auto error
	/// handling enabled and no delegate.
	pub fn new(service: Arc<dyn TokenService>) -> Self {
		Self {
			inner: Arc::new(Inner {
				service,
				auto_handle_error: AtomicBool::new(true),
				state: Mutex::new(ControllerState {
					lifecycle: LifecycleState::Idle,
					ui: UiState::default(),
					form: CardForm::new(),
					delegate: None,
					in_flight: None,
				}),
			}),
		}
	}

	/// Selects the failure-handling branch at construction. When disabled,
	/// failures are forwarded to the delegate unmodified instead of being
	/// rendered inline.
	pub fn with_auto_handle_error(self, enabled: bool) -> Self {
		self.inner.auto_handle_error.store(enabled, Ordering::Relaxed);
		self
	}

	/// Sets the caller-facing delegate. The reference is non-owning; a
	/// dropped delegate simply stops receiving notifications.
	pub async fn set_delegate(&self, delegate: Weak<dyn CardFormDelegate>) {
		self.inner.state.lock().await.delegate = Some(delegate);
	}

	/// Switches the failure-handling branch for subsequent outcomes.
	pub fn set_auto_handle_error(&self, enabled: bool) {
		self.inner.auto_handle_error.store(enabled, Ordering::Relaxed);
	}

	/// Records a field verdict after an edit and returns the new
	/// submittable flag for the submit control.
	///
	/// Any edit clears a previously displayed error banner before the
	/// aggregate is re-evaluated.
	pub async fn record_field(&self, verdict: FieldVerdict) -> bool {
		let mut state = self.inner.state.lock().await;
		state.ui.error_banner = None;
		state.form.record(verdict);
		state.form.is_submittable()
	}

	/// True iff every required field currently holds a valid verdict.
	pub async fn is_submittable(&self) -> bool {
		self.inner.state.lock().await.form.is_submittable()
	}

	/// Snapshot of the UI-affecting flags.
	pub async fn ui_state(&self) -> UiState {
		self.inner.state.lock().await.ui.clone()
	}

	/// Current lifecycle state.
	pub async fn lifecycle(&self) -> LifecycleState {
		self.inner.state.lock().await.lifecycle
	}

	/// Submits the card input for tokenization.
	///
	/// A second submit while a request is in flight is dropped (at most one
	/// request is ever in flight). Input is re-validated defensively even
	/// though the aggregator gates the submit control; on failure the
	/// controller stays `Idle`, no request is dispatched, and the error is
	/// returned to the direct caller without crossing the delegate boundary.
	pub async fn submit(&self, input: CardInput) -> Result<(), TokenError> {
		let mut state = self.inner.state.lock().await;
		if state.lifecycle == LifecycleState::InFlight {
			tracing::debug!("submit ignored: a tokenization request is already in flight");
			return Ok(());
		}

		// Starting a new submit clears any banner left by a prior failure.
		state.ui.error_banner = None;

		let request = match TokenizationRequest::from_input(&input) {
			Ok(request) => request,
			Err(err) => {
				tracing::warn!(error = %err, "submit refused: card input failed re-validation");
				return Err(err);
			}
		};

		state.lifecycle = LifecycleState::InFlight;
		state.ui.busy = true;
		state.ui.form_enabled = false;

		let inner = Arc::clone(&self.inner);
		state.in_flight = Some(tokio::spawn(async move {
			let outcome = inner.service.tokenize(request).await;
			inner.complete(outcome).await;
		}));
		Ok(())
	}

	/// Ends the current interaction.
	///
	/// A literally in-flight service call is aborted: no outcome will be
	/// delivered for it. State and UI flags reset to their idle defaults.
	pub async fn dismiss(&self) {
		let mut state = self.inner.state.lock().await;
		if let Some(handle) = state.in_flight.take() {
			handle.abort();
			tracing::debug!("dismissed while a tokenization request was in flight; aborting it");
		}
		state.lifecycle = LifecycleState::Idle;
		state.ui = UiState::default();
	}
}
