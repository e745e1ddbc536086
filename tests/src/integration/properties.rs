//! # Behavior Properties
//!
//! Universally-quantified checks over the dispatcher path: exhaustive
//! truncation sweeps over declared argument sequences, and property-based
//! state checks driven through call envelopes.

#[cfg(test)]
mod tests {
    use contract_abi::{ArgsReader, ArgsWriter};
    use greeter_contract::prelude::*;
    use proptest::prelude::*;

    use crate::init_tracing;

    fn constructor_args(greeting: &str, value: u32, counter: i32) -> Vec<u8> {
        ArgsWriter::new()
            .add_string(greeting)
            .add_u32(value)
            .add_i32(counter)
            .into_bytes()
    }

    fn fresh_service() -> GreeterService<InMemoryStorage, InMemoryEventLog, FixedDeploymentOracle>
    {
        init_tracing();
        create_test_service(ServiceConfig::default())
    }

    // =========================================================================
    // TRUNCATION SWEEPS
    // =========================================================================

    #[test]
    fn test_constructor_aborts_at_every_truncation_point() {
        let full = constructor_args("hello", 5, -3);

        // Every strict prefix of the declared field sequence is missing at
        // least one argument; none may mutate storage.
        for cut in 0..full.len() {
            let mut service = fresh_service();
            let err = service
                .call(entry_points::CONSTRUCTOR, &full[..cut])
                .unwrap_err();
            assert!(
                err.is_missing_argument(),
                "cut at {cut} gave {err}, expected a missing argument"
            );
            assert!(service.storage().is_empty(), "cut at {cut} wrote storage");
            assert!(service.events().is_empty(), "cut at {cut} emitted events");
        }

        let mut service = fresh_service();
        assert!(service.call(entry_points::CONSTRUCTOR, &full).is_ok());
    }

    #[test]
    fn test_single_field_setters_abort_on_every_truncation() {
        let set_value_full = ArgsWriter::new().add_u32(42).into_bytes();
        let set_greeting_full = ArgsWriter::new().add_string("bye").into_bytes();

        for (entry, full) in [
            (entry_points::SET_VALUE, set_value_full),
            (entry_points::SET_GREETING, set_greeting_full),
        ] {
            for cut in 0..full.len() {
                let mut service = fresh_service();
                service
                    .call(entry_points::CONSTRUCTOR, &constructor_args("hi", 1, 1))
                    .unwrap();
                service.oracle_mut().set_deploying(false);
                let before = service.storage().snapshot();

                let err = service.call(entry, &full[..cut]).unwrap_err();
                assert!(err.is_missing_argument(), "{entry} cut at {cut}: {err}");
                assert_eq!(service.storage().snapshot(), before);
            }
        }
    }

    // =========================================================================
    // PROPERTY-BASED STATE CHECKS
    // =========================================================================

    proptest! {
        /// Constructed state reads back exactly, for arbitrary triples.
        #[test]
        fn prop_deploy_reports_initial_state(
            greeting in "[a-zA-Z0-9 ]{0,24}",
            value in any::<u32>(),
            counter in any::<i32>(),
        ) {
            let mut service = fresh_service();
            let response = service.handle_call(&CallRequestPayload::new(
                entry_points::CONSTRUCTOR,
                constructor_args(&greeting, value, counter),
            ));
            prop_assert!(response.success);
            service.oracle_mut().set_deploying(false);

            prop_assert_eq!(
                service.call(entry_points::GREET, &[]).unwrap(),
                greeting.as_bytes().to_vec()
            );
            prop_assert_eq!(
                service.call(entry_points::GET_VALUE, &[]).unwrap(),
                value.to_string().into_bytes()
            );
            prop_assert_eq!(
                service.call(entry_points::GET_COUNTER, &[]).unwrap(),
                counter.to_string().into_bytes()
            );
            prop_assert!(check_all_invariants(service.storage()).unwrap().is_valid());
        }

        /// A balanced run of increments and decrements is the identity.
        #[test]
        fn prop_balanced_steps_are_identity(
            counter in any::<i32>(),
            rounds in 1usize..8,
        ) {
            let mut service = fresh_service();
            service
                .call(entry_points::CONSTRUCTOR, &constructor_args("x", 0, counter))
                .unwrap();
            service.oracle_mut().set_deploying(false);

            for _ in 0..rounds {
                service.call(entry_points::INCREMENT, &[]).unwrap();
            }
            for _ in 0..rounds {
                service.call(entry_points::DECREMENT, &[]).unwrap();
            }

            prop_assert_eq!(
                service.call(entry_points::GET_COUNTER, &[]).unwrap(),
                counter.to_string().into_bytes()
            );
        }

        /// The counter variant's composite return always decodes in declared
        /// order as `(u32, string)`.
        #[test]
        fn prop_complex_operation_output_decodes(
            operation in "[a-z]{1,10}",
            value1 in any::<u32>(),
            value2 in any::<u32>(),
            flag in any::<bool>(),
        ) {
            use counter_contract::prelude::{self as counter_prelude, ContractApi as _};

            let mut service = counter_prelude::create_test_service();
            let args = ArgsWriter::new()
                .add_string(&operation)
                .add_u32(value1)
                .add_u32(value2)
                .add_bool(flag)
                .into_bytes();

            let out = service
                .call(counter_prelude::entry_points::COMPLEX_OPERATION, &args)
                .unwrap();

            let mut reader = ArgsReader::new(&out);
            let _result = reader.next_u32().unwrap();
            let message = reader.next_string().unwrap();
            prop_assert!(reader.is_exhausted());
            prop_assert_eq!(message, format!("Operation {} completed", operation));
        }
    }
}
