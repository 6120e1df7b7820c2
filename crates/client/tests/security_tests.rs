//! Role and space tests (Kibana 7.x only).
//!
//! This module tests:
//! - Role create, read, list and delete against `/api/security/role`
//! - Space create, update, read, list and delete against `/api/spaces/space`
//! - Both clients being unavailable before 7.0

mod common;

use common::*;
use kibana_client::models::{IndexPrivilege, KibanaPrivilege};
use kibana_client::{Role, Space};
use serde_json::json;
use std::collections::BTreeMap;
use wiremock::matchers::{body_json, header, method, path};

fn dashboard_reader() -> Role {
    let mut role = Role::new("dashboard_reader");
    role.elasticsearch.cluster = vec!["monitor".to_string()];
    role.elasticsearch.indices = vec![IndexPrivilege {
        names: vec!["logstash-*".to_string()],
        privileges: vec!["read".to_string()],
        ..IndexPrivilege::default()
    }];
    role.kibana = vec![KibanaPrivilege {
        feature: BTreeMap::from([("dashboard".to_string(), vec!["read".to_string()])]),
        spaces: vec!["marketing".to_string()],
        ..KibanaPrivilege::default()
    }];
    role
}

#[tokio::test]
async fn test_put_role_sends_body_without_name() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/security/role/dashboard_reader"))
        .and(header("kbn-xsrf", "true"))
        .and(body_json(json!({
            "metadata": {},
            "elasticsearch": {
                "cluster": ["monitor"],
                "indices": [{"names": ["logstash-*"], "privileges": ["read"]}],
                "run_as": []
            },
            "kibana": [{"base": [], "feature": {"dashboard": ["read"]}, "spaces": ["marketing"]}]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server, "7.2.0");
    let roles = client.role().unwrap();
    roles.create(&dashboard_reader()).await.unwrap();
    roles.update(&dashboard_reader()).await.unwrap();
}

#[tokio::test]
async fn test_get_list_and_delete_roles() {
    let server = MockServer::start().await;
    let role = load_fixture("roles/get_role.json");
    let mut unnamed = role.clone();
    unnamed.as_object_mut().unwrap().remove("name");

    Mock::given(method("GET"))
        .and(path("/api/security/role/my_kibana_role"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&unnamed))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/security/role"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([role])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/security/role/my_kibana_role"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "7.2.0");
    let roles = client.role().unwrap();

    let fetched = roles.get_by_name("my_kibana_role").await.unwrap();
    assert_eq!(fetched.name, "my_kibana_role");
    assert_eq!(fetched.kibana[0].spaces, vec!["marketing", "sales"]);

    let listed = roles.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].elasticsearch.cluster, vec!["all"]);

    roles.delete("my_kibana_role").await.unwrap();
}

#[tokio::test]
async fn test_unnamed_role_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = client_for(&server, "7.2.0");
    let err = client.role().unwrap().create(&Role::new(" ")).await.unwrap_err();
    assert!(err.is_validation_error());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_space_crud() {
    let server = MockServer::start().await;
    let mut marketing = Space::new("marketing", "Marketing");
    marketing.initials = Some("MK".to_string());
    marketing.disabled_features = vec!["timelion".to_string()];

    Mock::given(method("POST"))
        .and(path("/api/spaces/space"))
        .and(body_json(json!({
            "id": "marketing",
            "name": "Marketing",
            "initials": "MK",
            "disabledFeatures": ["timelion"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&marketing))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/spaces/space/marketing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "marketing",
            "name": "Marketing and Sales",
            "disabledFeatures": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/spaces/space"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("spaces/list_spaces.json")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/spaces/space/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "error": "Not Found",
            "message": "Not Found"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/spaces/space/marketing"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "7.2.0");
    let spaces = client.space().unwrap();

    let created = spaces.create(&marketing).await.unwrap();
    assert_eq!(created, marketing);

    let mut renamed = marketing.clone();
    renamed.name = "Marketing and Sales".to_string();
    let updated = spaces.update(&renamed).await.unwrap();
    assert_eq!(updated.name, "Marketing and Sales");

    let listed = spaces.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].reserved, Some(true));

    assert!(spaces.get_by_id("missing").await.unwrap_err().is_not_found());
    spaces.delete("marketing").await.unwrap();
}

#[test]
fn test_roles_and_spaces_require_v7() {
    for version in ["5.5.3", "6.0.0"] {
        let client = KibanaClient::new(Config::new("http://localhost:5601", version)).unwrap();
        assert!(client.role().unwrap_err().is_configuration_error(), "{version}");
        assert!(client.space().unwrap_err().is_configuration_error(), "{version}");
    }
}
