//! # Abort and Rollback Flows
//!
//! Every failed call must leave storage byte-identical and the event log
//! unappended, across both contract lineages. Includes a randomized mix of
//! valid and invalid calls that re-checks the invariants after every step.

#[cfg(test)]
mod tests {
    use contract_abi::ArgsWriter;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::init_tracing;

    // =========================================================================
    // GREETER ABORTS
    // =========================================================================

    mod greeter {
        use super::*;
        use greeter_contract::prelude::*;

        fn deployed() -> GreeterService<InMemoryStorage, InMemoryEventLog, FixedDeploymentOracle>
        {
            init_tracing();
            let mut service = create_test_service(ServiceConfig::default());
            let args = ArgsWriter::new()
                .add_string("hello")
                .add_u32(5)
                .add_i32(-3)
                .into_bytes();
            service.call(entry_points::CONSTRUCTOR, &args).unwrap();
            service.oracle_mut().set_deploying(false);
            service
        }

        #[test]
        fn test_every_abort_kind_leaves_no_trace() {
            let mut service = deployed();
            let storage_before = service.storage().snapshot();
            let events_before = service.events().len();

            // Unknown entry point.
            service.call("mint", &[]).unwrap_err();
            // Truncated setValue buffer.
            service.call(entry_points::SET_VALUE, &[1, 2]).unwrap_err();
            // Malformed setGreeting body (length prefix but invalid UTF-8).
            let mut bad_utf8 = 2u32.to_le_bytes().to_vec();
            bad_utf8.extend_from_slice(&[0xFF, 0xFE]);
            service
                .call(entry_points::SET_GREETING, &bad_utf8)
                .unwrap_err();
            // Second constructor.
            let ctor_args = ArgsWriter::new()
                .add_string("again")
                .add_u32(1)
                .add_i32(1)
                .into_bytes();
            service
                .call(entry_points::CONSTRUCTOR, &ctor_args)
                .unwrap_err();

            assert_eq!(service.storage().snapshot(), storage_before);
            assert_eq!(service.events().len(), events_before);
            assert_eq!(service.stats().aborted_calls, 4);
            assert!(check_all_invariants(service.storage()).unwrap().is_valid());
        }

        #[test]
        fn test_failed_deployment_leaves_storage_undeployed() {
            init_tracing();
            let mut service = create_test_service(ServiceConfig::default());

            // Value field truncated: greeting would decode, nothing commits.
            let mut args = ArgsWriter::new().add_string("hello").into_bytes();
            args.extend_from_slice(&[5, 0]);
            service.call(entry_points::CONSTRUCTOR, &args).unwrap_err();

            assert!(service.storage().is_empty());
            assert!(service.events().is_empty());

            // The instance is still deployable afterwards.
            let good = ArgsWriter::new()
                .add_string("hello")
                .add_u32(5)
                .add_i32(-3)
                .into_bytes();
            assert!(service.call(entry_points::CONSTRUCTOR, &good).is_ok());
        }

        #[test]
        fn test_randomized_call_mix_preserves_invariants() {
            let mut service = deployed();
            let mut rng = StdRng::seed_from_u64(0x5eed);

            for _ in 0..200 {
                match rng.gen_range(0..6u8) {
                    0 => {
                        service.call(entry_points::INCREMENT, &[]).unwrap();
                    }
                    1 => {
                        service.call(entry_points::DECREMENT, &[]).unwrap();
                    }
                    2 => {
                        let args = ArgsWriter::new().add_u32(rng.gen()).into_bytes();
                        service.call(entry_points::SET_VALUE, &args).unwrap();
                    }
                    3 => {
                        // Truncated buffer: must abort cleanly.
                        let len = rng.gen_range(0..4usize);
                        service
                            .call(entry_points::SET_VALUE, &vec![0u8; len])
                            .unwrap_err();
                    }
                    4 => {
                        service.call("notAnExport", &[]).unwrap_err();
                    }
                    _ => {
                        service.call(entry_points::GREET, &[]).unwrap();
                    }
                }

                assert!(check_all_invariants(service.storage()).unwrap().is_valid());
            }
        }
    }

    // =========================================================================
    // COUNTER ABORTS
    // =========================================================================

    mod counter {
        use super::*;
        use counter_contract::prelude::*;

        #[test]
        fn test_aborts_leave_counter_untouched() {
            init_tracing();
            let mut service = create_test_service();
            service.call(entry_points::INIT, &[]).unwrap();
            service.oracle_mut().set_deploying(false);

            service
                .call(entry_points::RESET, &ArgsWriter::new().add_u32(9).into_bytes())
                .unwrap();
            let before = service.storage().snapshot();

            // Truncated amount, unknown entry, second init.
            service.call(entry_points::INCREMENT, &[1]).unwrap_err();
            service.call("burn", &[]).unwrap_err();
            service.call(entry_points::INIT, &[]).unwrap_err();

            // Malformed bool in complexOperation.
            let mut args = ArgsWriter::new()
                .add_string("add")
                .add_u32(1)
                .add_u32(2)
                .into_bytes();
            args.push(7);
            service
                .call(entry_points::COMPLEX_OPERATION, &args)
                .unwrap_err();

            assert_eq!(service.storage().snapshot(), before);
            assert_eq!(service.stats().aborted_calls, 4);
        }
    }
}
