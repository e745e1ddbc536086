//! # Counter Semantics Side by Side
//!
//! The two contract lineages deliberately disagree about the counter's
//! boundaries: the greeter's is signed with free range, the counter
//! contract's is unsigned with clamp-at-zero. These tests pin both, plus the
//! greeter's configuration knob that selects the clamped behavior.

#[cfg(test)]
mod tests {
    use contract_abi::{values, ArgsWriter};

    use crate::init_tracing;

    fn deployed_greeter(
        counter: i32,
        semantics: greeter_contract::prelude::CounterSemantics,
    ) -> greeter_contract::prelude::GreeterService<
        greeter_contract::prelude::InMemoryStorage,
        greeter_contract::prelude::InMemoryEventLog,
        greeter_contract::prelude::FixedDeploymentOracle,
    > {
        use greeter_contract::prelude::*;

        init_tracing();
        let mut service = create_test_service(ServiceConfig {
            counter_semantics: semantics,
        });
        let args = ArgsWriter::new()
            .add_string("hi")
            .add_u32(0)
            .add_i32(counter)
            .into_bytes();
        service.call(entry_points::CONSTRUCTOR, &args).unwrap();
        service.oracle_mut().set_deploying(false);
        service
    }

    #[test]
    fn test_signed_lineage_goes_negative() {
        use greeter_contract::prelude::*;

        let mut service = deployed_greeter(0, CounterSemantics::SignedWrapping);
        service.call(entry_points::DECREMENT, &[]).unwrap();

        assert_eq!(
            service.call(entry_points::GET_COUNTER, &[]).unwrap(),
            b"-1".to_vec()
        );
    }

    #[test]
    fn test_clamped_configuration_floors_at_zero() {
        use greeter_contract::prelude::*;

        let mut service = deployed_greeter(0, CounterSemantics::UnsignedSaturating);
        service.call(entry_points::DECREMENT, &[]).unwrap();
        service.call(entry_points::DECREMENT, &[]).unwrap();

        assert_eq!(
            service.call(entry_points::GET_COUNTER, &[]).unwrap(),
            b"0".to_vec()
        );
    }

    #[test]
    fn test_unsigned_lineage_clamps_at_zero() {
        use counter_contract::prelude::*;

        init_tracing();
        let mut service = create_test_service();
        service.call(entry_points::INIT, &[]).unwrap();
        service.oracle_mut().set_deploying(false);

        let out = service
            .call(
                entry_points::DECREMENT,
                &ArgsWriter::new().add_u32(1).into_bytes(),
            )
            .unwrap();
        assert_eq!(values::bytes_to_u32(&out).unwrap(), 0);
    }

    #[test]
    fn test_boundary_behavior_differs_per_lineage() {
        // Signed lineage: one past i32::MAX wraps negative.
        {
            use greeter_contract::prelude::*;
            let mut service = deployed_greeter(i32::MAX, CounterSemantics::SignedWrapping);
            service.call(entry_points::INCREMENT, &[]).unwrap();
            assert_eq!(
                service.call(entry_points::GET_COUNTER, &[]).unwrap(),
                i32::MIN.to_string().into_bytes()
            );
        }

        // Unsigned lineage: one past u32::MAX wraps through zero instead.
        {
            use counter_contract::prelude::*;
            let mut service = create_test_service();
            service.call(entry_points::INIT, &[]).unwrap();
            service.oracle_mut().set_deploying(false);

            service
                .call(
                    entry_points::RESET,
                    &ArgsWriter::new().add_u32(u32::MAX).into_bytes(),
                )
                .unwrap();
            let out = service
                .call(
                    entry_points::INCREMENT,
                    &ArgsWriter::new().add_u32(1).into_bytes(),
                )
                .unwrap();
            assert_eq!(values::bytes_to_u32(&out).unwrap(), 0);
        }
    }

    #[test]
    fn test_lineages_store_different_encodings() {
        // Same logical value, two on-disk schemas: decimal text vs LE bytes.
        let signed_bytes = {
            use greeter_contract::prelude::*;
            let mut service = deployed_greeter(7, CounterSemantics::SignedWrapping);
            service.call(entry_points::GET_COUNTER, &[]).unwrap()
        };
        assert_eq!(signed_bytes, b"7".to_vec());

        let unsigned_bytes = {
            use counter_contract::prelude::*;
            let mut service = create_test_service();
            service.call(entry_points::INIT, &[]).unwrap();
            service.oracle_mut().set_deploying(false);
            service
                .call(
                    entry_points::RESET,
                    &ArgsWriter::new().add_u32(7).into_bytes(),
                )
                .unwrap()
        };
        assert_eq!(unsigned_bytes, vec![7, 0, 0, 0]);
    }
}
