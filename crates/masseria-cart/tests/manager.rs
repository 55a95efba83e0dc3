use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use masseria_cart::dom;
use masseria_cart::prelude::*;
use masseria_fetch::mock::MockTransport;
use masseria_fetch::{FetchClient, FetchError};
use masseria_store::{Backend, MemoryBackend, Store, StoreError};
use serde_json::json;

type TestManager = CartManager<MemoryBackend, MockTransport>;

fn soles(cents: i64) -> Money {
    Money::new(cents, Currency::PEN)
}

fn manager_with(transport: MockTransport) -> TestManager {
    let client = FetchClient::new(transport).with_base_url("http://masseria.test/");
    CartManager::load(Store::new(MemoryBackend::new()), client, CartConfig::default()).unwrap()
}

fn manager() -> TestManager {
    manager_with(MockTransport::new())
}

fn pickup_cash_form() -> OrderForm {
    OrderForm::gather(
        &FormValues::new()
            .with(dom::CUSTOMER_NAME, "Ana Torres")
            .with(dom::PHONE, "987654321")
            .with(dom::DELIVERY_METHOD, "recoger")
            .with(dom::PAYMENT_METHOD, "efectivo")
            .with(dom::CASH_TENDERED, "100"),
    )
    .unwrap()
}

/// Accepts a fixed number of writes, then fails every one after.
struct FailingWrites {
    inner: MemoryBackend,
    writes_left: AtomicUsize,
}

impl FailingWrites {
    fn after(writes: usize) -> Self {
        Self {
            inner: MemoryBackend::new(),
            writes_left: AtomicUsize::new(writes),
        }
    }
}

impl Backend for FailingWrites {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        if self.writes_left.load(Ordering::SeqCst) == 0 {
            return Err(StoreError::StoreError("disk full".to_string()));
        }
        self.writes_left.fetch_sub(1, Ordering::SeqCst);
        self.inner.set(key, value)
    }
}

fn stored_items(manager: &TestManager) -> Vec<StoredItem> {
    manager.store().get("carrito").unwrap().unwrap_or_default()
}

#[test]
fn test_pizza_decrement_scenario() {
    let mut manager = manager();
    manager.add_item("Pizza", soles(2500), "img/pizza.jpg", 2).unwrap();

    let view = manager.decrement(0).unwrap();
    assert_eq!(view.rows[0].quantity, 1);
    assert_eq!(view.total, "S/ 25.00");

    let view = manager.decrement(0).unwrap();
    assert!(view.rows.is_empty());
    assert_eq!(view.total, "S/ 0.00");
    assert_eq!(view.counter, 0);
    assert!(stored_items(&manager).is_empty());
}

#[test]
fn test_every_mutation_is_written_through() {
    let mut manager = manager();
    manager.add_item("Pizza", soles(2500), "p.jpg", 1).unwrap();
    manager.add_item("Lasagna", soles(3200), "l.jpg", 2).unwrap();
    assert_eq!(stored_items(&manager).len(), 2);

    manager.increment(0).unwrap();
    assert_eq!(stored_items(&manager)[0].quantity, 2);

    manager.remove(1).unwrap();
    let stored = stored_items(&manager);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Pizza");
}

#[test]
fn test_reload_reproduces_cart() {
    let backend_text = {
        let mut manager = manager();
        manager.add_item("Pizza", soles(2599), "p.jpg", 3).unwrap();
        manager.add_item("Vino", soles(4500), "v.jpg", 1).unwrap();
        manager.decrement(0).unwrap();
        manager.store().get_text("carrito").unwrap().unwrap()
    };

    let backend = MemoryBackend::new();
    backend.set("carrito", backend_text.as_bytes()).unwrap();
    let reloaded = CartManager::load(
        Store::new(backend),
        FetchClient::new(MockTransport::new()),
        CartConfig::default(),
    )
    .unwrap();

    let names: Vec<&str> = reloaded.cart().items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Pizza", "Vino"]);
    assert_eq!(reloaded.cart().get(0).unwrap().quantity, 2);
    assert_eq!(reloaded.render().unwrap().total, "S/ 96.98");
}

#[test]
fn test_corrupt_storage_loads_empty() {
    let backend = MemoryBackend::new();
    backend.set("carrito", b"{{{").unwrap();
    let manager = CartManager::load(
        Store::new(backend),
        FetchClient::new(MockTransport::new()),
        CartConfig::default(),
    )
    .unwrap();
    assert!(manager.cart().is_empty());
}

#[test]
fn test_out_of_range_changes_nothing() {
    let mut manager = manager();
    manager.add_item("Pizza", soles(2500), "", 1).unwrap();
    assert!(matches!(
        manager.remove(5),
        Err(CartError::IndexOutOfRange { index: 5, len: 1 })
    ));
    assert_eq!(manager.cart().len(), 1);
}

fn seeded_manager() -> TestManager {
    let mut manager = manager();
    manager.add_item("Pizza", soles(2500), "", 2).unwrap();
    manager.add_item("Lasagna", soles(3250), "", 1).unwrap();
    manager.add_item("Agua", soles(400), "", 3).unwrap();
    manager
}

/// Every action sequence of `len` steps over indices `0..=max_index`.
fn action_sequences(len: usize, max_index: usize) -> Vec<Vec<CartAction>> {
    let alphabet: Vec<CartAction> = (0..=max_index)
        .flat_map(|i| {
            [
                CartAction::Increment(i),
                CartAction::Decrement(i),
                CartAction::Remove(i),
            ]
        })
        .collect();

    let mut sequences = vec![Vec::new()];
    for _ in 0..len {
        sequences = sequences
            .into_iter()
            .flat_map(|seq| {
                alphabet.iter().map(move |action| {
                    let mut next = seq.clone();
                    next.push(*action);
                    next
                })
            })
            .collect();
    }
    sequences
}

#[test]
fn test_total_tracks_sum_through_dispatch() {
    // One index past the end of the seeded cart so out-of-range rows are hit too.
    let max_index = seeded_manager().cart().len();
    for sequence in action_sequences(4, max_index) {
        let mut manager = seeded_manager();
        for action in &sequence {
            let before = manager.cart().clone();
            let in_range = match action {
                CartAction::Increment(i) | CartAction::Decrement(i) | CartAction::Remove(i) => {
                    *i < before.len()
                }
                CartAction::Toggle => true,
            };

            match manager.dispatch(*action) {
                Ok(view) => {
                    assert!(in_range, "{:?} accepted on {:?}", action, sequence);
                    let expected: i64 = manager
                        .cart()
                        .items()
                        .iter()
                        .map(|i| i.unit_price.amount_cents * i.quantity)
                        .sum();
                    let count: i64 = manager.cart().items().iter().map(|i| i.quantity).sum();
                    assert_eq!(view.total, soles(expected).display(), "{:?}", sequence);
                    assert_eq!(view.counter, count, "{:?}", sequence);
                    assert_eq!(view.rows.len(), manager.cart().len());
                    assert_eq!(stored_items(&manager).len(), manager.cart().len());
                }
                Err(e) => {
                    assert!(!in_range, "{:?} failed on {:?}: {}", action, sequence, e);
                    assert!(matches!(e, CartError::IndexOutOfRange { .. }));
                    assert_eq!(manager.cart(), &before);
                }
            }
        }
    }
}

#[test]
fn test_toggle_flips_visibility() {
    let mut manager = manager();
    assert!(!manager.is_visible());
    assert!(manager.dispatch(CartAction::Toggle).unwrap().visible);
    assert!(!manager.toggle_visibility().unwrap().visible);
}

#[test]
fn test_begin_checkout() {
    let mut manager = manager();
    assert_eq!(
        manager.begin_checkout(),
        PageEffect::Alert("⚠️ El carrito está vacío.".to_string())
    );
    manager.add_item("Pizza", soles(2500), "", 1).unwrap();
    assert_eq!(manager.begin_checkout(), PageEffect::ShowPaymentForm);
}

#[test]
fn test_form_panels() {
    let mut manager = manager();
    assert!(manager.select_delivery("enviar").unwrap());
    assert!(manager.address_visible());
    assert!(!manager.select_delivery("recoger").unwrap());

    assert_eq!(manager.select_payment("efectivo")[0].kind, FieldKind::Number);
    assert_eq!(manager.select_payment("tarjeta").len(), 3);
    assert!(manager
        .payment_fields()
        .iter()
        .all(|f| f.id != dom::CASH_TENDERED));
}

#[tokio::test]
async fn test_empty_cart_submission_sends_nothing() {
    let mut manager = manager_with(MockTransport::new().reply_json(200, json!({"status": "success"})));

    let outcome = manager.submit(&pickup_cash_form()).await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Blocked { .. }));
    assert_eq!(manager.client().transport().request_count(), 0);
}

#[tokio::test]
async fn test_successful_submission_clears_cart() {
    let mut manager = manager_with(MockTransport::new().reply_json(200, json!({"status": "success"})));
    manager.add_item("Pizza", soles(2500), "p.jpg", 2).unwrap();

    let outcome = manager.submit(&pickup_cash_form()).await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Placed {
            message: CartConfig::default().success_message,
            redirect: "index.html".to_string(),
            delay: Duration::from_millis(3000),
        }
    );
    assert!(manager.cart().is_empty());
    assert_eq!(manager.store().get_text("carrito").unwrap().as_deref(), Some("[]"));

    let effects = outcome.effects();
    assert!(matches!(effects[0], PageEffect::ReplaceBody(_)));
    assert_eq!(
        effects[1],
        PageEffect::Navigate {
            url: "index.html".to_string(),
            after: Duration::from_millis(3000),
        }
    );

    let requests = manager.client().transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url(), "http://masseria.test/insertar_pedido.php");
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["total"], json!(50.0));
    assert_eq!(body["conCuanto"], "100");
    assert_eq!(body["productos"][0]["total"], "50.00");
}

#[tokio::test]
async fn test_server_message_and_redirect_are_used() {
    let mut manager = manager_with(MockTransport::new().reply_json(
        200,
        json!({"status": "success", "message": "Pedido #7 registrado", "redirect": "/menu"}),
    ));
    manager.add_item("Pizza", soles(2500), "", 1).unwrap();

    match manager.submit(&pickup_cash_form()).await.unwrap() {
        SubmitOutcome::Placed {
            message, redirect, ..
        } => {
            assert_eq!(message, "Pedido #7 registrado");
            assert_eq!(redirect, "/menu");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_rejected_submission_keeps_cart() {
    let mut manager = manager_with(
        MockTransport::new().reply_json(200, json!({"status": "error", "message": "cocina cerrada"})),
    );
    manager.add_item("Pizza", soles(2500), "", 2).unwrap();
    let before = manager.store().get_text("carrito").unwrap();

    let outcome = manager.submit(&pickup_cash_form()).await.unwrap();
    match &outcome {
        SubmitOutcome::Failed { alert, reason } => {
            assert_eq!(alert, "❌ Error al procesar el pedido.");
            assert_eq!(
                reason,
                &FailureReason::Rejected {
                    status: "error".to_string(),
                    message: Some("cocina cerrada".to_string()),
                }
            );
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(manager.cart().item_count(), 2);
    assert_eq!(manager.store().get_text("carrito").unwrap(), before);
    assert_eq!(outcome.effects(), vec![PageEffect::Alert("❌ Error al procesar el pedido.".to_string())]);
}

#[tokio::test]
async fn test_transport_failure_keeps_cart_and_allows_retry() {
    let mut manager = manager_with(
        MockTransport::new()
            .fail(FetchError::Timeout)
            .reply_json(200, json!({"status": "success"})),
    );
    manager.add_item("Pizza", soles(2500), "", 1).unwrap();

    let first = manager.submit(&pickup_cash_form()).await.unwrap();
    assert!(matches!(
        first,
        SubmitOutcome::Failed {
            reason: FailureReason::Transport(_),
            ..
        }
    ));
    assert_eq!(manager.cart().len(), 1);

    let second = manager.submit(&pickup_cash_form()).await.unwrap();
    assert!(second.is_placed());
    assert!(manager.cart().is_empty());
    assert_eq!(manager.client().transport().request_count(), 2);
}

#[tokio::test]
async fn test_unparseable_reply_is_failure() {
    let mut manager = manager_with(MockTransport::new().reply(masseria_fetch::Response::new(
        200,
        Default::default(),
        b"<b>Fatal error</b>".to_vec(),
    )));
    manager.add_item("Pizza", soles(2500), "", 1).unwrap();

    let outcome = manager.submit(&pickup_cash_form()).await.unwrap();
    assert!(matches!(
        outcome,
        SubmitOutcome::Failed {
            reason: FailureReason::Transport(_),
            ..
        }
    ));
    assert_eq!(manager.cart().len(), 1);
}

#[tokio::test]
async fn test_http_error_is_failure() {
    let mut manager =
        manager_with(MockTransport::new().reply_json(500, json!({"status": "success"})));
    manager.add_item("Pizza", soles(2500), "", 1).unwrap();

    let outcome = manager.submit(&pickup_cash_form()).await.unwrap();
    assert!(matches!(
        outcome,
        SubmitOutcome::Failed {
            reason: FailureReason::Http(500),
            ..
        }
    ));
    assert_eq!(manager.cart().len(), 1);
}

#[tokio::test]
async fn test_accepted_order_survives_failed_write() {
    // One write for the add; the clear after acceptance fails.
    let client = FetchClient::new(MockTransport::new().reply_json(200, json!({"status": "success"})))
        .with_base_url("http://masseria.test/");
    let mut manager =
        CartManager::load(Store::new(FailingWrites::after(1)), client, CartConfig::default()).unwrap();
    manager.add_item("Pizza", soles(2500), "p.jpg", 2).unwrap();

    let outcome = manager.submit(&pickup_cash_form()).await.unwrap();
    assert!(outcome.is_placed());
    assert!(manager.cart().is_empty());
    assert_eq!(manager.client().transport().request_count(), 1);

    let again = manager.submit(&pickup_cash_form()).await.unwrap();
    assert!(matches!(again, SubmitOutcome::Blocked { .. }));
    assert_eq!(manager.client().transport().request_count(), 1);

    assert!(matches!(
        manager.add_item("Vino", soles(4500), "", 1),
        Err(CartError::Store(_))
    ));
}
