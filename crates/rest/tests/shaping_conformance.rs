//! Integration tests for the response-shaping pipeline: field selection,
//! media-type negotiation, hypermedia links, and pagination metadata.

mod common;

use serde_json::Value;

use common::{RosterTestHarness, HATEOAS_JSON};

fn object_keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("expected a JSON object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

#[tokio::test]
async fn test_collection_defaults_to_full_flat_shape() {
    let harness = RosterTestHarness::new();
    harness.seed_demo().await;

    let response = harness.get("/api/companies").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let items = body.as_array().expect("flat response is a bare array");
    assert_eq!(items.len(), 1);
    assert_eq!(object_keys(&items[0]), vec!["full_address", "id", "name"]);
    assert_eq!(items[0]["name"], "IT_Solutions Ltd");
    assert_eq!(
        items[0]["full_address"],
        "583 Wall Dr. Gwynn Oak, MD 21207 USA"
    );
}

#[tokio::test]
async fn test_fields_narrow_items_and_keep_identity() {
    let harness = RosterTestHarness::new();
    harness.seed_demo().await;

    let response = harness.get("/api/companies?fields=name").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(object_keys(&items[0]), vec!["id", "name"]);
}

#[tokio::test]
async fn test_unknown_field_tokens_are_silently_dropped() {
    let harness = RosterTestHarness::new();
    harness.seed_demo().await;

    let response = harness
        .get("/api/companies?fields=name,turnover,%20,full_address")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(object_keys(&items[0]), vec!["full_address", "id", "name"]);
}

#[tokio::test]
async fn test_field_matching_is_case_insensitive() {
    let harness = RosterTestHarness::new();
    let company = harness.seed_demo().await;

    let path = format!("/api/companies/{}/employees?fields=NAME,Age", company.id);
    let response = harness.get(&path).await;
    response.assert_status_ok();

    let body: Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(object_keys(&items[0]), vec!["age", "id", "name"]);
}

#[tokio::test]
async fn test_hateoas_accept_wraps_collection() {
    let harness = RosterTestHarness::new();
    harness.seed_demo().await;

    let response = harness
        .get_with_accept("/api/companies", HATEOAS_JSON)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let value = body["value"].as_array().expect("wrapper carries `value`");
    assert_eq!(value.len(), 1);

    // Collection-level self link.
    let links = body["links"].as_array().expect("wrapper carries `links`");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["rel"], "self");
    assert_eq!(links[0]["method"], "GET");
    assert!(links[0]["href"]
        .as_str()
        .unwrap()
        .ends_with("/api/companies"));

    // Companies have no PATCH endpoint, so the item set is reduced.
    let item_links = value[0]["links"].as_array().unwrap();
    let rels: Vec<&str> = item_links
        .iter()
        .map(|l| l["rel"].as_str().unwrap())
        .collect();
    assert_eq!(rels, vec!["self", "delete_company", "update_company"]);
}

#[tokio::test]
async fn test_employee_items_carry_full_link_set() {
    let harness = RosterTestHarness::new();
    let company = harness.seed_demo().await;

    let path = format!("/api/companies/{}/employees", company.id);
    let response = harness.get_with_accept(&path, HATEOAS_JSON).await;
    response.assert_status_ok();

    let body: Value = response.json();
    let value = body["value"].as_array().unwrap();
    assert_eq!(value.len(), 3);

    for item in value {
        let links = item["links"].as_array().unwrap();
        let rels: Vec<&str> = links.iter().map(|l| l["rel"].as_str().unwrap()).collect();
        assert_eq!(
            rels,
            vec![
                "self",
                "delete_employee",
                "update_employee",
                "partially_update_employee"
            ]
        );
        let methods: Vec<&str> = links
            .iter()
            .map(|l| l["method"].as_str().unwrap())
            .collect();
        assert_eq!(methods, vec!["GET", "DELETE", "PUT", "PATCH"]);
        // Every link resolves under the owning company.
        for link in links {
            let href = link["href"].as_str().unwrap();
            assert!(href.contains(&company.id.to_string()), "href: {}", href);
        }
    }
}

#[tokio::test]
async fn test_self_link_preserves_field_selection() {
    let harness = RosterTestHarness::new();
    let company = harness.seed_demo().await;

    let path = format!("/api/companies/{}/employees?fields=name,age", company.id);
    let response = harness.get_with_accept(&path, HATEOAS_JSON).await;
    response.assert_status_ok();

    let body: Value = response.json();
    let links = body["value"][0]["links"].as_array().unwrap();
    let self_href = links[0]["href"].as_str().unwrap();
    assert!(self_href.ends_with("?fields=name%2Cage"), "href: {}", self_href);

    // Only the self link carries the pass-through query.
    for link in &links[1..] {
        assert!(!link["href"].as_str().unwrap().contains("fields"));
    }
}

#[tokio::test]
async fn test_hateoas_suffix_and_case_variants_negotiate_links() {
    let harness = RosterTestHarness::new();
    harness.seed_demo().await;

    for accept in [
        "application/vnd.roster.hateoas+json",
        "application/vnd.roster.HATEOAS+json",
        "application/vnd.roster.hateoas",
    ] {
        let response = harness.get_with_accept("/api/companies", accept).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body.is_object(), "accept {} should negotiate links", accept);
    }
}

#[tokio::test]
async fn test_plain_json_accept_stays_flat() {
    let harness = RosterTestHarness::new();
    harness.seed_demo().await;

    let response = harness
        .get_with_accept("/api/companies", "application/json")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body.is_array(), "plain json must not be wrapped");
}

#[tokio::test]
async fn test_linked_items_match_flat_items_apart_from_links() {
    let harness = RosterTestHarness::new();
    let company = harness.seed_demo().await;

    let path = format!("/api/companies/{}/employees?fields=name", company.id);
    let flat: Value = harness.get(&path).await.json();
    let linked: Value = harness.get_with_accept(&path, HATEOAS_JSON).await.json();

    let flat_items = flat.as_array().unwrap();
    let linked_items = linked["value"].as_array().unwrap();
    assert_eq!(flat_items.len(), linked_items.len());

    for (flat_item, linked_item) in flat_items.iter().zip(linked_items) {
        let mut stripped = linked_item.clone();
        stripped.as_object_mut().unwrap().remove("links");
        assert_eq!(flat_item, &stripped);
    }
}

#[tokio::test]
async fn test_x_pagination_header_describes_the_collection() {
    let harness = RosterTestHarness::new();
    let company = harness.seed_demo().await;

    let path = format!(
        "/api/companies/{}/employees?page_number=2&page_size=2",
        company.id
    );
    let response = harness.get(&path).await;
    response.assert_status_ok();

    let header = response.header("x-pagination");
    let metadata: Value =
        serde_json::from_slice(header.as_bytes()).expect("header is JSON");
    assert_eq!(metadata["currentPage"], 2);
    assert_eq!(metadata["pageSize"], 2);
    assert_eq!(metadata["totalCount"], 3);
    assert_eq!(metadata["totalPages"], 2);

    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_collection_still_carries_collection_link() {
    let harness = RosterTestHarness::new();
    let company = harness
        .seed_company("Admin_Solutions Ltd", "312 Forest Avenue, BF 923", "USA")
        .await;

    let path = format!("/api/companies/{}/employees", company.id);
    let response = harness.get_with_accept(&path, HATEOAS_JSON).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["value"].as_array().unwrap().is_empty());
    assert_eq!(body["links"].as_array().unwrap().len(), 1);
}
