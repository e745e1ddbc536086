//! # Lifecycle Choreography
//!
//! Drives the greeter contract the way a host would: deployment call first,
//! then ordinary calls, everything through serde envelopes with correlation
//! IDs. Storage, event sink, and deployment oracle are explicit values
//! handed to the service, never ambient state.

#[cfg(test)]
mod tests {
    use contract_abi::ArgsWriter;
    use greeter_contract::prelude::*;

    use crate::init_tracing;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    type Harness = GreeterService<InMemoryStorage, InMemoryEventLog, FixedDeploymentOracle>;

    fn constructor_args(greeting: &str, value: u32, counter: i32) -> Vec<u8> {
        ArgsWriter::new()
            .add_string(greeting)
            .add_u32(value)
            .add_i32(counter)
            .into_bytes()
    }

    /// Deploys through the envelope path and closes the deployment window.
    fn deploy(greeting: &str, value: u32, counter: i32) -> Harness {
        init_tracing();
        let mut service = create_test_service(ServiceConfig::default());

        let request = CallRequestPayload::new(
            entry_points::CONSTRUCTOR,
            constructor_args(greeting, value, counter),
        );
        let response = service.handle_call(&request);
        assert!(response.success, "deployment failed: {response:?}");

        service.oracle_mut().set_deploying(false);
        service
    }

    fn call(service: &mut Harness, entry_point: &str, args: Vec<u8>) -> CallResponsePayload {
        service.handle_call(&CallRequestPayload::new(entry_point, args))
    }

    // =========================================================================
    // DEPLOY-THEN-CALL FLOWS
    // =========================================================================

    #[test]
    fn test_deploy_then_read_every_field() {
        let mut service = deploy("hello", 5, -3);

        let greet = call(&mut service, entry_points::GREET, vec![]);
        assert!(greet.success);
        assert_eq!(greet.output, b"hello".to_vec());

        let value = call(&mut service, entry_points::GET_VALUE, vec![]);
        assert_eq!(value.output, b"5".to_vec());

        let counter = call(&mut service, entry_points::GET_COUNTER, vec![]);
        assert_eq!(counter.output, b"-3".to_vec());

        // Reads emit nothing; only the deployment event exists.
        assert_eq!(
            service.events().entries(),
            ["Greeting, Value, and Counter initialized"]
        );
    }

    #[test]
    fn test_full_session_matches_expected_transcript() {
        let mut service = deploy("hello", 5, -3);

        call(&mut service, entry_points::INCREMENT, vec![]);
        call(
            &mut service,
            entry_points::SET_GREETING,
            ArgsWriter::new().add_string("bye").into_bytes(),
        );
        call(
            &mut service,
            entry_points::SET_VALUE,
            ArgsWriter::new().add_u32(10).into_bytes(),
        );
        call(&mut service, entry_points::DECREMENT, vec![]);

        assert_eq!(
            call(&mut service, entry_points::GREET, vec![]).output,
            b"bye".to_vec()
        );
        assert_eq!(
            call(&mut service, entry_points::GET_VALUE, vec![]).output,
            b"10".to_vec()
        );
        assert_eq!(
            call(&mut service, entry_points::GET_COUNTER, vec![]).output,
            b"-3".to_vec()
        );

        assert_eq!(
            service.events().entries(),
            [
                "Greeting, Value, and Counter initialized",
                "Counter incremented to: -2",
                "Greeting updated to: bye",
                "Value updated to: 10",
                "Counter decremented to: -3",
            ]
        );

        let stats = service.stats();
        assert_eq!(stats.aborted_calls, 0);
        assert_eq!(stats.committed_calls, stats.calls_handled);
    }

    #[test]
    fn test_responses_echo_correlation_ids() {
        let mut service = deploy("hello", 5, -3);

        // A host-minted correlation ID must come back verbatim.
        let expected_id = uuid::Uuid::new_v4();
        let request = CallRequestPayload {
            correlation_id: expected_id,
            entry_point: entry_points::GREET.to_string(),
            args: vec![],
        };
        let response = service.handle_call(&request);

        assert_eq!(response.correlation_id, expected_id);
    }

    #[test]
    fn test_envelopes_survive_json_transport() {
        let mut service = deploy("hello", 5, -3);

        // Host transports serialize the envelope; the call must behave the
        // same after a round trip.
        let request = CallRequestPayload::new(
            entry_points::SET_VALUE,
            ArgsWriter::new().add_u32(77).into_bytes(),
        );
        let wire = serde_json::to_vec(&request).unwrap();
        let delivered: CallRequestPayload = serde_json::from_slice(&wire).unwrap();

        let response = service.handle_call(&delivered);
        assert!(response.success);
        assert_eq!(
            call(&mut service, entry_points::GET_VALUE, vec![]).output,
            b"77".to_vec()
        );
    }

    #[test]
    fn test_invariants_hold_through_a_session() {
        let mut service = deploy("hello", 0, 0);

        assert!(check_all_invariants(service.storage()).unwrap().is_valid());

        for _ in 0..3 {
            call(&mut service, entry_points::INCREMENT, vec![]);
            assert!(check_all_invariants(service.storage()).unwrap().is_valid());
        }
        for _ in 0..5 {
            call(&mut service, entry_points::DECREMENT, vec![]);
            assert!(check_all_invariants(service.storage()).unwrap().is_valid());
        }

        assert_eq!(
            call(&mut service, entry_points::GET_COUNTER, vec![]).output,
            b"-2".to_vec()
        );
    }
}
