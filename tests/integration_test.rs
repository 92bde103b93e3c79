//! End-to-end tests that combine several optic kinds on a realistic model.

use std::collections::HashMap;

use kaleido::optics::{
    Lens, Optic, OpticKind, Optional, Traversal, map_key_prism, some_prism, vec_each,
    vec_index_prism,
};
use kaleido::typeclass::Sum;
use kaleido::{lens, prism};
use rstest::{fixture, rstest};

// =============================================================================
// Model
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Contact {
    email: Option<String>,
    phone: Option<String>,
}

#[derive(Clone, PartialEq, Debug)]
struct Profile {
    contact: Contact,
    tags: Vec<String>,
}

#[derive(Clone, PartialEq, Debug)]
struct User {
    name: String,
    profile: Profile,
}

#[derive(Clone, PartialEq, Debug)]
enum Payment {
    Card { last4: String, amount: u32 },
    Cash(u32),
}

#[derive(Clone, PartialEq, Debug)]
struct Order {
    lines: Vec<u32>,
    payment: Payment,
}

fn user(email: Option<&str>) -> User {
    User {
        name: "ada".to_string(),
        profile: Profile {
            contact: Contact {
                email: email.map(str::to_string),
                phone: None,
            },
            tags: vec!["admin".to_string(), "ops".to_string()],
        },
    }
}

fn profile() -> Lens<User, Profile> {
    lens!(User, profile)
}

fn contact_email() -> Optional<Profile, String> {
    Optional::new(
        |profile: &Profile| profile.contact.email.clone(),
        |mut profile: Profile, email| {
            profile.contact.email = Some(email);
            profile
        },
    )
}

fn cash() -> kaleido::optics::Prism<Payment, u32> {
    prism!(Payment, Cash)
}

#[fixture]
fn orders() -> Vec<Order> {
    vec![
        Order {
            lines: vec![100, 250],
            payment: Payment::Cash(350),
        },
        Order {
            lines: vec![40],
            payment: Payment::Card {
                last4: "4242".to_string(),
                amount: 40,
            },
        },
        Order {
            lines: vec![5, 5, 5],
            payment: Payment::Cash(15),
        },
    ]
}

// =============================================================================
// Lens composed with Optional
// =============================================================================

#[rstest]
fn test_profile_email_present_and_absent() {
    let user_email = profile().then(contact_email());
    assert_eq!(user_email.kind(), OpticKind::Optional);
    assert_eq!(
        user_email.get_option(&user(Some("a@b.com"))),
        Some("a@b.com".to_string())
    );
    assert_eq!(user_email.get_option(&user(None)), None);
}

#[rstest]
fn test_profile_email_writes_only_when_present() {
    let user_email = profile().then(contact_email());
    assert_eq!(user_email.set(user(None), "x@y.z".to_string()), user(None));
    assert_eq!(
        user_email.modify(user(Some("A@B.COM")), |email| email.to_lowercase()),
        user(Some("a@b.com"))
    );
}

#[rstest]
fn test_email_through_field_lens_and_some_prism() {
    let email_field = lens!(User, profile)
        .compose(lens!(Profile, contact))
        .compose(lens!(Contact, email));
    let email = email_field.then(some_prism::<String>());
    assert_eq!(email.kind(), OpticKind::Optional);
    assert_eq!(email.get_option(&user(Some("q@r.s"))), Some("q@r.s".to_string()));
    assert_eq!(email.set(user(None), "new@x.y".to_string()), user(None));
}

#[rstest]
fn test_phone_fallback_with_or_else() {
    let phone = lens!(User, profile)
        .compose(lens!(Profile, contact))
        .compose(lens!(Contact, phone))
        .then(some_prism::<String>())
        .into_optional()
        .expect("lens then prism is optional")
        .or_else("unknown".to_string());
    assert_eq!(phone.get(&user(None)), "unknown");
}

// =============================================================================
// Traversals over a collection of records
// =============================================================================

#[rstest]
fn test_all_tags_upper_case() {
    let tags = profile()
        .then(lens!(Profile, tags))
        .then(vec_each::<String>());
    assert_eq!(tags.kind(), OpticKind::Traversal);
    let updated = tags.modify(user(None), |tag| tag.to_uppercase());
    assert_eq!(updated.profile.tags, vec!["ADMIN", "OPS"]);
}

#[rstest]
fn test_cash_totals_across_orders(orders: Vec<Order>) {
    let cash_amounts = vec_each::<Order>()
        .then(lens!(Order, payment))
        .then(cash())
        .to_traversal();
    assert_eq!(cash_amounts.get_all(&orders), vec![350, 15]);
    assert_eq!(cash_amounts.fold_map(&orders, Sum), Sum(365));
}

#[rstest]
fn test_discount_largest_cash_payment(orders: Vec<Order>) {
    let largest_cash = vec_each::<Order>()
        .then(lens!(Order, payment))
        .then(cash())
        .to_traversal()
        .sort_by_key(|amount| std::cmp::Reverse(*amount))
        .take(1);
    let discounted = largest_cash.modify(orders.clone(), |amount| amount - 50);
    assert_eq!(discounted[0].payment, Payment::Cash(300));
    assert_eq!(discounted[1], orders[1]);
    assert_eq!(discounted[2], orders[2]);
}

#[rstest]
fn test_every_line_of_every_order(orders: Vec<Order>) {
    let lines: Traversal<Vec<Order>, u32> = vec_each::<Order>()
        .then(lens!(Order, lines))
        .then(vec_each::<u32>())
        .into_traversal()
        .expect("traversal composition is a traversal");
    assert_eq!(lines.length(&orders), 6);
    assert_eq!(lines.clone().distinct().get_all(&orders), vec![100, 250, 40, 5]);
    assert!(lines.all(&orders, |line| *line > 0));
    assert_eq!(lines.clone().slice(-2, 6).get_all(&orders), vec![5, 5]);
}

#[rstest]
fn test_card_payments_untouched_by_cash_edit(orders: Vec<Order>) {
    let cash_amounts = vec_each::<Order>()
        .then(lens!(Order, payment))
        .then(cash());
    let doubled = cash_amounts.modify(orders, |amount| amount * 2);
    assert_eq!(
        doubled[1].payment,
        Payment::Card {
            last4: "4242".to_string(),
            amount: 40
        }
    );
    assert_eq!(doubled[2].payment, Payment::Cash(30));
}

// =============================================================================
// Indexed optics inside a plain pipeline
// =============================================================================

#[rstest]
fn test_keyed_and_positional_lookup() {
    let rosters = HashMap::from([
        ("north".to_string(), vec!["kim".to_string(), "lee".to_string()]),
        ("south".to_string(), vec![]),
    ]);
    let captain = map_key_prism::<String, Vec<String>>("north".to_string())
        .then(vec_index_prism::<String>(0));
    assert_eq!(captain.get_option(&rosters), Some("kim".to_string()));
    assert_eq!(
        captain.get_option_at(&("south".to_string(), 0), &rosters),
        None
    );

    let plain: Optic<HashMap<String, Vec<String>>, String> = captain.optic();
    assert_eq!(plain.kind(), OpticKind::Prism);
    let renamed = plain.set(rosters, "max".to_string());
    assert_eq!(renamed["north"], vec!["max".to_string(), "lee".to_string()]);
}
