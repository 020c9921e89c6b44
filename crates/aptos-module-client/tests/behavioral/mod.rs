//! Behavioral tests for module clients.
//!
//! These tests drive generated clients through mock collaborators and a mock
//! fullnode, without requiring a live network.

use aptos_module_client::api::response::MoveModuleABI;
use aptos_module_client::capability::{
    AccountResourceReader, CompositeCollaborator, EventReader, SignerOrClient, TransactionSigner,
};
use aptos_module_client::types::{
    Event, EventQuery, Resource, ResourceQuery, SubmitOptions, SubmitResponse, TransactionPayload,
};
use aptos_module_client::AptosResult;
use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

fn coin_abi() -> MoveModuleABI {
    serde_json::from_value(json!({
        "address": "0x1",
        "name": "coin",
        "friends": [],
        "exposed_functions": [
            {
                "name": "transfer",
                "visibility": "public",
                "is_entry": true,
                "is_view": false,
                "generic_type_params": [{"constraints": []}],
                "params": ["&signer", "address", "u64"],
                "return": []
            },
            {
                "name": "balance",
                "visibility": "public",
                "is_entry": false,
                "is_view": true,
                "generic_type_params": [{"constraints": []}],
                "params": ["address"],
                "return": ["u64"]
            }
        ],
        "structs": [
            {
                "name": "CoinStore",
                "is_native": false,
                "abilities": ["key"],
                "generic_type_params": [{"constraints": []}],
                "fields": [
                    {"name": "coin", "type": "0x1::coin::Coin<T0>"},
                    {"name": "frozen", "type": "bool"},
                    {"name": "deposit_events", "type": "0x1::event::EventHandle<0x1::coin::DepositEvent>"},
                    {"name": "withdraw_events", "type": "0x1::event::EventHandle<0x1::coin::WithdrawEvent>"}
                ]
            },
            {
                "name": "DepositEvent",
                "is_native": false,
                "abilities": ["drop", "store"],
                "generic_type_params": [],
                "fields": [{"name": "amount", "type": "u64"}]
            }
        ]
    }))
    .unwrap()
}

/// A collaborator that records every delegated call.
#[derive(Default)]
struct RecordingCollaborator {
    can_sign: bool,
    can_read_resources: bool,
    can_read_events: bool,
    submit_response: Option<SubmitResponse>,
    submissions: Mutex<Vec<(TransactionPayload, Option<SubmitOptions>)>>,
    resource_reads: Mutex<Vec<(String, String)>>,
    event_reads: Mutex<Vec<(String, String, String, Option<EventQuery>)>>,
}

impl RecordingCollaborator {
    fn full() -> Self {
        Self {
            can_sign: true,
            can_read_resources: true,
            can_read_events: true,
            submit_response: Some(SubmitResponse::Hash("0xabc".to_string())),
            ..Self::default()
        }
    }
}

#[async_trait]
impl TransactionSigner for RecordingCollaborator {
    async fn sign_and_submit_transaction(
        &self,
        payload: TransactionPayload,
        options: Option<SubmitOptions>,
    ) -> AptosResult<Option<SubmitResponse>> {
        self.submissions.lock().unwrap().push((payload, options));
        Ok(self.submit_response.clone())
    }
}

#[async_trait]
impl AccountResourceReader for RecordingCollaborator {
    async fn get_account_resource(
        &self,
        account: &str,
        resource_type: &str,
        _query: Option<ResourceQuery>,
    ) -> AptosResult<Resource> {
        self.resource_reads
            .lock()
            .unwrap()
            .push((account.to_string(), resource_type.to_string()));
        Ok(Resource {
            typ: resource_type.to_string(),
            data: json!({"frozen": false}),
        })
    }
}

#[async_trait]
impl EventReader for RecordingCollaborator {
    async fn get_events_by_event_handle(
        &self,
        account: &str,
        event_handle_struct: &str,
        field_name: &str,
        query: Option<EventQuery>,
    ) -> AptosResult<Vec<Event>> {
        self.event_reads.lock().unwrap().push((
            account.to_string(),
            event_handle_struct.to_string(),
            field_name.to_string(),
            query,
        ));
        Ok(vec![])
    }
}

impl SignerOrClient for RecordingCollaborator {
    fn signer(self: Arc<Self>) -> Option<Arc<dyn TransactionSigner>> {
        if self.can_sign {
            Some(self)
        } else {
            None
        }
    }

    fn resource_reader(self: Arc<Self>) -> Option<Arc<dyn AccountResourceReader>> {
        if self.can_read_resources {
            Some(self)
        } else {
            None
        }
    }

    fn event_reader(self: Arc<Self>) -> Option<Arc<dyn EventReader>> {
        if self.can_read_events {
            Some(self)
        } else {
            None
        }
    }
}

mod generation_tests {
    use super::*;
    use aptos_module_client::client::MemberKind;
    use aptos_module_client::AptosModuleClient;

    #[test]
    fn test_coin_module_members() {
        let client = AptosModuleClient::new(
            &coin_abi(),
            Arc::new(RecordingCollaborator::full()),
            None,
        );

        assert_eq!(
            client.names().collect::<Vec<_>>(),
            vec![
                "transfer",
                "getCoinStore",
                "getDepositEvents",
                "getWithdrawEvents"
            ]
        );
        assert_eq!(client.member("transfer").unwrap().kind(), MemberKind::EntryFunction);
        assert_eq!(client.member("getCoinStore").unwrap().kind(), MemberKind::Resource);
        assert_eq!(client.member("getDepositEvents").unwrap().kind(), MemberKind::Events);
        assert!(client.members().all(|m| m.is_bound()));

        // View functions and non-key structs generate nothing.
        assert!(!client.contains("balance"));
        assert!(!client.contains("getDepositEvent"));
    }

    #[test]
    fn test_generation_is_repeatable() {
        let abi = coin_abi();
        let first = AptosModuleClient::new(&abi, Arc::new(RecordingCollaborator::full()), None);
        let second = AptosModuleClient::new(&abi, Arc::new(RecordingCollaborator::full()), None);

        assert_eq!(
            first.names().collect::<Vec<_>>(),
            second.names().collect::<Vec<_>>()
        );
        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }

    #[test]
    fn test_empty_module() {
        let abi: MoveModuleABI = serde_json::from_value(json!({
            "address": "0x1",
            "name": "empty",
            "exposed_functions": [],
            "structs": []
        }))
        .unwrap();
        let client = AptosModuleClient::new(&abi, Arc::new(RecordingCollaborator::full()), None);
        assert!(client.is_empty());
    }
}

mod capability_tests {
    use super::*;
    use aptos_module_client::types::{EntryFunctionArgs, EventGetterParams};
    use aptos_module_client::{AptosModuleClient, Capability};

    #[test]
    fn test_missing_resource_reader() {
        let collaborator = RecordingCollaborator {
            can_read_resources: false,
            ..RecordingCollaborator::full()
        };
        let client = AptosModuleClient::new(&coin_abi(), Arc::new(collaborator), None);

        assert!(client.contains("getCoinStore"));
        assert!(!client.resource_getter("getCoinStore").unwrap().is_bound());

        let err = client
            .get_resource("getCoinStore", "0x1", None)
            .err()
            .unwrap();
        assert_eq!(err.missing_capability(), Some(Capability::AccountResource));
        assert_eq!(
            err.to_string(),
            "Signer does not implement the \"get_account_resource\" function."
        );
    }

    #[test]
    fn test_missing_event_reader() {
        let collaborator = RecordingCollaborator {
            can_read_events: false,
            ..RecordingCollaborator::full()
        };
        let client = AptosModuleClient::new(&coin_abi(), Arc::new(collaborator), None);

        let err = client
            .get_events("getDepositEvents", "0x1", EventGetterParams::new())
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Signer does not implement the \"get_events_by_event_handle\" function."
        );
    }

    #[test]
    fn test_read_only_collaborator_cannot_sign() {
        let collaborator = RecordingCollaborator {
            can_sign: false,
            ..RecordingCollaborator::full()
        };
        let client = AptosModuleClient::new(&coin_abi(), Arc::new(collaborator), None);

        let err = client
            .call_entry_function("transfer", EntryFunctionArgs::new(), None)
            .err()
            .unwrap();
        assert_eq!(err.missing_capability(), Some(Capability::Signer));
        assert_eq!(err.to_string(), "Client is not able to sign transactions.");
    }

    #[test]
    fn test_composite_collaborator() {
        let wallet = Arc::new(RecordingCollaborator {
            can_read_resources: false,
            can_read_events: false,
            ..RecordingCollaborator::full()
        });
        let reader = Arc::new(RecordingCollaborator::full());
        let collaborator = CompositeCollaborator::new()
            .with_signer(wallet)
            .with_resource_reader(reader.clone())
            .with_event_reader(reader);

        let client = AptosModuleClient::new(&coin_abi(), Arc::new(collaborator), None);
        assert!(client.capabilities().can_sign());
        assert!(client.members().all(|m| m.is_bound()));
    }
}

mod delegation_tests {
    use super::*;
    use aptos_module_client::types::{EntryFunctionArgs, EventGetterParams, PendingTransaction};
    use aptos_module_client::AptosModuleClient;

    #[tokio::test]
    async fn test_transfer_without_arguments() {
        let collaborator = Arc::new(RecordingCollaborator::full());
        let client = AptosModuleClient::new(&coin_abi(), collaborator.clone(), None);

        client
            .call_entry_function("transfer", EntryFunctionArgs::default(), None)
            .unwrap()
            .await
            .unwrap();

        let submissions = collaborator.submissions.lock().unwrap();
        assert_eq!(submissions.len(), 1);
        let (payload, options) = &submissions[0];
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({
                "type": "entry_function_payload",
                "function": "0x1::coin::transfer",
                "type_arguments": [],
                "arguments": []
            })
        );
        assert!(options.is_none());
    }

    #[tokio::test]
    async fn test_transfer_forwards_arguments_and_options() {
        let collaborator = Arc::new(RecordingCollaborator::full());
        let client = AptosModuleClient::new(&coin_abi(), collaborator.clone(), None);

        let args = EntryFunctionArgs::new()
            .with_type_argument("0x1::aptos_coin::AptosCoin")
            .with_argument("0x2")
            .with_argument("100");
        let options = SubmitOptions::default().with_max_gas_amount(2000);
        client
            .call_entry_function("transfer", args, Some(options.clone()))
            .unwrap()
            .await
            .unwrap();

        let submissions = collaborator.submissions.lock().unwrap();
        let (payload, forwarded) = &submissions[0];
        let payload = payload.as_entry_function().unwrap();
        assert_eq!(payload.type_arguments, vec!["0x1::aptos_coin::AptosCoin"]);
        assert_eq!(payload.arguments, vec![json!("0x2"), json!("100")]);
        assert_eq!(forwarded.as_ref(), Some(&options));
    }

    #[tokio::test]
    async fn test_submit_result_normalization() {
        let responses = [
            (Some(SubmitResponse::Hash("abc".to_string())), Some("abc")),
            (
                Some(SubmitResponse::Pending(PendingTransaction::from_hash("abc"))),
                Some("abc"),
            ),
            (None, None),
        ];

        for (response, expected) in responses {
            let collaborator = RecordingCollaborator {
                submit_response: response,
                ..RecordingCollaborator::full()
            };
            let client = AptosModuleClient::new(&coin_abi(), Arc::new(collaborator), None);
            let hash = client
                .call_entry_function("transfer", EntryFunctionArgs::new(), None)
                .unwrap()
                .await
                .unwrap();
            assert_eq!(hash.as_deref(), expected);
        }
    }

    #[test]
    fn test_submit_response_shapes() {
        let bare: SubmitResponse = serde_json::from_value(json!("abc")).unwrap();
        let object: SubmitResponse = serde_json::from_value(json!({"hash": "abc"})).unwrap();
        assert_eq!(bare.into_hash(), "abc");
        assert_eq!(object.into_hash(), "abc");
    }

    #[tokio::test]
    async fn test_resource_getter_type_parameter() {
        let collaborator = Arc::new(RecordingCollaborator::full());
        let client = AptosModuleClient::new(&coin_abi(), collaborator.clone(), None);

        client
            .get_resource("getCoinStore", "0x2", Some("0x1::aptos_coin::AptosCoin"))
            .unwrap()
            .await
            .unwrap();
        client
            .get_resource("getCoinStore", "0x2", None)
            .unwrap()
            .await
            .unwrap();

        assert_eq!(
            *collaborator.resource_reads.lock().unwrap(),
            vec![
                (
                    "0x2".to_string(),
                    "0x1::coin::CoinStore<0x1::aptos_coin::AptosCoin>".to_string()
                ),
                ("0x2".to_string(), "0x1::coin::CoinStore".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_event_getter_forwards_query() {
        let collaborator = Arc::new(RecordingCollaborator::full());
        let client = AptosModuleClient::new(&coin_abi(), collaborator.clone(), Some("0xcafe"));

        let query = EventQuery::new().with_start(10).with_limit(5);
        let params = EventGetterParams::new()
            .with_type_parameter("0x1::aptos_coin::AptosCoin")
            .with_query(query);
        client
            .get_events("getWithdrawEvents", "0x2", params)
            .unwrap()
            .await
            .unwrap();

        assert_eq!(
            *collaborator.event_reads.lock().unwrap(),
            vec![(
                "0x2".to_string(),
                "0xcafe::coin::CoinStore<0x1::aptos_coin::AptosCoin>".to_string(),
                "withdraw_events".to_string(),
                Some(query),
            )]
        );
    }
}

mod collaborator_tests {
    use super::*;
    use aptos_module_client::types::{EntryFunctionArgs, EventGetterParams};
    use aptos_module_client::{AptosError, AptosModuleClient};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts how often each capability accessor is asked for.
    struct CountingCollaborator {
        inner: Arc<RecordingCollaborator>,
        signer_lookups: AtomicUsize,
        resource_reader_lookups: AtomicUsize,
        event_reader_lookups: AtomicUsize,
    }

    impl SignerOrClient for CountingCollaborator {
        fn signer(self: Arc<Self>) -> Option<Arc<dyn TransactionSigner>> {
            self.signer_lookups.fetch_add(1, Ordering::SeqCst);
            Arc::clone(&self.inner).signer()
        }

        fn resource_reader(self: Arc<Self>) -> Option<Arc<dyn AccountResourceReader>> {
            self.resource_reader_lookups.fetch_add(1, Ordering::SeqCst);
            Arc::clone(&self.inner).resource_reader()
        }

        fn event_reader(self: Arc<Self>) -> Option<Arc<dyn EventReader>> {
            self.event_reader_lookups.fetch_add(1, Ordering::SeqCst);
            Arc::clone(&self.inner).event_reader()
        }
    }

    /// A wallet and reader that refuse every request.
    struct RejectingCollaborator;

    #[async_trait]
    impl TransactionSigner for RejectingCollaborator {
        async fn sign_and_submit_transaction(
            &self,
            _payload: TransactionPayload,
            _options: Option<SubmitOptions>,
        ) -> AptosResult<Option<SubmitResponse>> {
            Err(AptosError::Other(anyhow::anyhow!("wallet rejected")))
        }
    }

    #[async_trait]
    impl EventReader for RejectingCollaborator {
        async fn get_events_by_event_handle(
            &self,
            _account: &str,
            _event_handle_struct: &str,
            _field_name: &str,
            _query: Option<EventQuery>,
        ) -> AptosResult<Vec<Event>> {
            Err(AptosError::api_with_details(
                410,
                "events pruned",
                Some("events_pruned".to_string()),
                None,
            ))
        }
    }

    impl SignerOrClient for RejectingCollaborator {
        fn signer(self: Arc<Self>) -> Option<Arc<dyn TransactionSigner>> {
            Some(self)
        }

        fn event_reader(self: Arc<Self>) -> Option<Arc<dyn EventReader>> {
            Some(self)
        }
    }

    #[tokio::test]
    async fn test_capabilities_are_detected_once() {
        let inner = Arc::new(RecordingCollaborator::full());
        let collaborator = Arc::new(CountingCollaborator {
            inner: inner.clone(),
            signer_lookups: AtomicUsize::new(0),
            resource_reader_lookups: AtomicUsize::new(0),
            event_reader_lookups: AtomicUsize::new(0),
        });
        let client = AptosModuleClient::new(&coin_abi(), collaborator.clone(), None);

        for _ in 0..3 {
            client
                .call_entry_function("transfer", EntryFunctionArgs::new(), None)
                .unwrap()
                .await
                .unwrap();
            client
                .get_resource("getCoinStore", "0x2", None)
                .unwrap()
                .await
                .unwrap();
            client
                .get_events("getDepositEvents", "0x2", EventGetterParams::new())
                .unwrap()
                .await
                .unwrap();
        }

        assert_eq!(collaborator.signer_lookups.load(Ordering::SeqCst), 1);
        assert_eq!(collaborator.resource_reader_lookups.load(Ordering::SeqCst), 1);
        assert_eq!(collaborator.event_reader_lookups.load(Ordering::SeqCst), 1);
        assert_eq!(inner.submissions.lock().unwrap().len(), 3);
        assert_eq!(inner.resource_reads.lock().unwrap().len(), 3);
        assert_eq!(inner.event_reads.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_signer_error_is_returned_unchanged() {
        let client = AptosModuleClient::new(&coin_abi(), Arc::new(RejectingCollaborator), None);

        let err = client
            .call_entry_function("transfer", EntryFunctionArgs::new(), None)
            .unwrap()
            .await
            .unwrap_err();

        assert!(matches!(err, AptosError::Other(_)));
        assert_eq!(err.to_string(), "wallet rejected");
        assert!(!err.is_missing_capability());
    }

    #[tokio::test]
    async fn test_event_reader_error_is_returned_unchanged() {
        let client = AptosModuleClient::new(&coin_abi(), Arc::new(RejectingCollaborator), None);

        let err = client
            .get_events("getDepositEvents", "0x2", EventGetterParams::new())
            .unwrap()
            .await
            .unwrap_err();

        match &err {
            AptosError::Api {
                status_code,
                message,
                error_code,
                vm_error_code,
            } => {
                assert_eq!(*status_code, 410);
                assert_eq!(message, "events pruned");
                assert_eq!(error_code.as_deref(), Some("events_pruned"));
                assert_eq!(*vm_error_code, None);
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
        assert!(!err.is_missing_capability());
    }
}

mod fullnode_tests {
    use super::*;
    use aptos_module_client::api::FullnodeClient;
    use aptos_module_client::types::{EntryFunctionArgs, EventGetterParams};
    use aptos_module_client::{AptosConfig, AptosModuleClient, Capability};
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mock_fullnode() -> (MockServer, Arc<FullnodeClient>) {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/accounts/0x1/module/coin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "bytecode": "0xa11ceb0b",
                "abi": coin_abi()
            })))
            .mount(&server)
            .await;

        let url = format!("{}/v1", server.uri());
        let fullnode = FullnodeClient::new(AptosConfig::custom(&url).unwrap()).unwrap();
        (server, Arc::new(fullnode))
    }

    #[tokio::test]
    async fn test_client_from_chain() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let (server, fullnode) = mock_fullnode().await;

        Mock::given(method("GET"))
            .and(path(
                "/v1/accounts/0x2/resource/0x1%3A%3Acoin%3A%3ACoinStore%3C0x1%3A%3Aaptos_coin%3A%3AAptosCoin%3E",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "type": "0x1::coin::CoinStore<0x1::aptos_coin::AptosCoin>",
                "data": {"coin": {"value": "500"}, "frozen": false}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(
                "/v1/accounts/0x2/events/0x1%3A%3Acoin%3A%3ACoinStore%3C0x1%3A%3Aaptos_coin%3A%3AAptosCoin%3E/deposit_events",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "version": "7",
                    "guid": {"creation_number": "2", "account_address": "0x2"},
                    "sequence_number": "0",
                    "type": "0x1::coin::DepositEvent",
                    "data": {"amount": "500"}
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = AptosModuleClient::from_chain(&fullnode, "0x1", "coin", fullnode.clone())
            .await
            .unwrap();

        let store = client
            .get_resource("getCoinStore", "0x2", Some("0x1::aptos_coin::AptosCoin"))
            .unwrap()
            .await
            .unwrap();
        assert_eq!(store.data["coin"]["value"], "500");

        let params = EventGetterParams::new().with_type_parameter("0x1::aptos_coin::AptosCoin");
        let events = client
            .get_events("getDepositEvents", "0x2", params)
            .unwrap()
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data["amount"], "500");
    }

    #[tokio::test]
    async fn test_fullnode_cannot_sign() {
        let (_server, fullnode) = mock_fullnode().await;
        let client = AptosModuleClient::from_chain(&fullnode, "0x1", "coin", fullnode.clone())
            .await
            .unwrap();

        let err = client
            .call_entry_function("transfer", EntryFunctionArgs::new(), None)
            .err()
            .unwrap();
        assert_eq!(err.missing_capability(), Some(Capability::Signer));
    }

    #[tokio::test]
    async fn test_reader_errors_pass_through() {
        let (server, fullnode) = mock_fullnode().await;

        Mock::given(method("GET"))
            .and(path("/v1/accounts/0x2/resource/0x1%3A%3Acoin%3A%3ACoinStore"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Resource not found",
                "error_code": "resource_not_found"
            })))
            .mount(&server)
            .await;

        let client = AptosModuleClient::from_chain(&fullnode, "0x1", "coin", fullnode.clone())
            .await
            .unwrap();
        let err = client
            .get_resource("getCoinStore", "0x2", None)
            .unwrap()
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(!err.is_missing_capability());
    }
}
