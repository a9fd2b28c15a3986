//! Creating SAML provider configurations.

use crate::common::fixtures::{SAML_CONFIG_RESPONSE, idp_certificates, minimal_create, sample_config};
use crate::common::{EchoTransport, TestClient, echo_client, unscoped_client};
use saml_provider_config::client::HttpMethod;
use saml_provider_config::{RequestContext, SamlProviderConfigToCreate};
use serde_json::{Value, json};

fn check_create_request(client: &TestClient, want_body: Value) {
    let request = client.transport().single_request();
    assert_eq!(request.method, HttpMethod::Post);

    let url = EchoTransport::request_url(&request);
    assert_eq!(url.path(), "/projects/mock-project-id/inboundSamlConfigs");
    assert_eq!(url.query(), Some("inboundSamlConfigId=saml.provider"));

    assert_eq!(EchoTransport::request_body(&request), want_body);
}

#[tokio::test]
async fn test_create_saml_provider_config() {
    let client = echo_client(EchoTransport::new(SAML_CONFIG_RESPONSE));
    let want = sample_config();
    let options = minimal_create()
        .display_name(want.display_name.clone())
        .enabled(want.enabled)
        .request_signing_enabled(want.request_signing_enabled);

    let created = client
        .create_saml_provider_config(&RequestContext::default(), &options)
        .await
        .unwrap();
    assert_eq!(created, want);

    check_create_request(
        &client,
        json!({
            "displayName": "samlProviderName",
            "enabled": true,
            "idpConfig": {
                "idpEntityId": "IDP_ENTITY_ID",
                "ssoUrl": "https://example.com/login",
                "signRequest": true,
                "idpCertificates": idp_certificates()
            },
            "spConfig": {
                "spEntityId": "RP_ENTITY_ID",
                "callbackUri": "https://projectId.firebaseapp.com/__/auth/handler"
            }
        }),
    );
}

#[tokio::test]
async fn test_create_saml_provider_config_minimal() {
    let client = echo_client(EchoTransport::new(SAML_CONFIG_RESPONSE));

    let created = client
        .create_saml_provider_config(&RequestContext::default(), &minimal_create())
        .await
        .unwrap();
    assert_eq!(created, sample_config());

    check_create_request(
        &client,
        json!({
            "idpConfig": {
                "idpEntityId": "IDP_ENTITY_ID",
                "ssoUrl": "https://example.com/login",
                "idpCertificates": idp_certificates()
            },
            "spConfig": {
                "spEntityId": "RP_ENTITY_ID",
                "callbackUri": "https://projectId.firebaseapp.com/__/auth/handler"
            }
        }),
    );
}

#[tokio::test]
async fn test_create_saml_provider_config_zero_values() {
    let client = echo_client(EchoTransport::new(SAML_CONFIG_RESPONSE));
    let options = minimal_create()
        .display_name("samlProviderName")
        .enabled(false)
        .request_signing_enabled(false);

    client
        .create_saml_provider_config(&RequestContext::default(), &options)
        .await
        .unwrap();

    check_create_request(
        &client,
        json!({
            "displayName": "samlProviderName",
            "enabled": false,
            "idpConfig": {
                "idpEntityId": "IDP_ENTITY_ID",
                "ssoUrl": "https://example.com/login",
                "signRequest": false,
                "idpCertificates": idp_certificates()
            },
            "spConfig": {
                "spEntityId": "RP_ENTITY_ID",
                "callbackUri": "https://projectId.firebaseapp.com/__/auth/handler"
            }
        }),
    );
}

#[tokio::test]
async fn test_create_round_trip_reproduces_groups() {
    let client = echo_client(EchoTransport::new(SAML_CONFIG_RESPONSE));
    let fetched = client
        .saml_provider_config(&RequestContext::default(), "saml.provider")
        .await
        .unwrap();

    let options = SamlProviderConfigToCreate::from_config(&fetched);
    client
        .create_saml_provider_config(&RequestContext::default(), &options)
        .await
        .unwrap();

    let original: Value = serde_json::from_str(SAML_CONFIG_RESPONSE).unwrap();
    let requests = client.transport().requests();
    let sent = EchoTransport::request_body(&requests[1]);
    assert_eq!(sent["idpConfig"], original["idpConfig"]);
    assert_eq!(sent["spConfig"], original["spConfig"]);
    assert_eq!(sent["displayName"], original["displayName"]);
    assert_eq!(sent["enabled"], original["enabled"]);
}

#[tokio::test]
async fn test_create_service_error_is_unknown() {
    let client = echo_client(EchoTransport::new("{}").with_status(500));
    let options = minimal_create().display_name("samlProviderName");

    let err = client
        .create_saml_provider_config(&RequestContext::default(), &options)
        .await
        .unwrap_err();
    assert!(err.is_unknown(), "{err:?}");
}

#[tokio::test]
async fn test_create_invalid_input() {
    let cases = vec![
        (
            "EmptyID",
            "invalid SAML provider id: ",
            SamlProviderConfigToCreate::new(),
        ),
        (
            "InvalidID",
            "invalid SAML provider id: ",
            SamlProviderConfigToCreate::new().id("oidc.provider"),
        ),
        (
            "EmptyOptions",
            "no parameters specified in the create request",
            SamlProviderConfigToCreate::new().id("saml.provider"),
        ),
        (
            "EmptyIDPEntityID",
            "IDPEntityID must not be empty",
            minimal_create().idp_entity_id(""),
        ),
        (
            "InvalidSSOURL",
            "failed to parse SSOURL: ",
            minimal_create().sso_url("not a url"),
        ),
        (
            "EmptyX509Certs",
            "X509Certificates must not be empty",
            minimal_create().x509_certificates(vec![]),
        ),
        (
            "EmptyStringInX509Certs",
            "X509Certificates must not contain empty strings",
            minimal_create().x509_certificates(vec!["CERT".to_string(), String::new()]),
        ),
        (
            "EmptyRPEntityID",
            "RPEntityID must not be empty",
            minimal_create().rp_entity_id(""),
        ),
        (
            "EmptyCallbackURL",
            "CallbackURL must not be empty",
            minimal_create().callback_url(""),
        ),
        (
            "InvalidCallbackURL",
            "failed to parse CallbackURL: ",
            minimal_create().callback_url("not a url"),
        ),
    ];

    // Validation runs before the project is resolved.
    let client = unscoped_client();
    for (name, want, options) in cases {
        let err = client
            .create_saml_provider_config(&RequestContext::default(), &options)
            .await
            .unwrap_err();
        assert!(
            err.to_string().starts_with(want),
            "{name}: got {err}, want prefix {want:?}"
        );
    }
    assert!(client.transport().requests().is_empty());
}
