// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Property tests: decrypt(encrypt(B, L, K), L, K) == B for arbitrary buffers,
// operation lists and keys.

use pixcloak_cipher::{PixelBuffer, Pipeline, permutation};
use pixcloak_core::types::{ChannelOrder, Operation};
use proptest::prelude::*;

fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
    (1u32..12, 1u32..12).prop_flat_map(|(w, h)| {
        proptest::collection::vec(any::<u8>(), (w * h * 4) as usize)
            .prop_map(move |data| PixelBuffer::from_rgba(w, h, data).unwrap())
    })
}

fn operations_strategy() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(proptest::sample::select(Operation::ALL.to_vec()), 1..8)
}

fn channel_order_strategy() -> impl Strategy<Value = ChannelOrder> {
    proptest::sample::select(vec![
        "RGB", "RBG", "GRB", "GBR", "BRG", "BGR", "ARGB", "BGRA", "GABR", "ABGR",
    ])
    .prop_map(|labels| ChannelOrder::parse(labels).unwrap())
}

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(
        buffer in buffer_strategy(),
        ops in operations_strategy(),
        key in any::<u64>(),
        order in channel_order_strategy(),
    ) {
        let pipeline = Pipeline::new(&ops, key, order).unwrap();
        let hidden = pipeline.encrypt(&buffer);
        prop_assert_eq!(hidden.shape(), buffer.shape());
        prop_assert_eq!(pipeline.decrypt(&hidden), buffer);
    }

    #[test]
    fn encryption_is_deterministic(
        buffer in buffer_strategy(),
        ops in operations_strategy(),
        key in any::<u64>(),
    ) {
        let a = Pipeline::new(&ops, key, ChannelOrder::default()).unwrap();
        let b = Pipeline::new(&ops, key, ChannelOrder::default()).unwrap();
        prop_assert_eq!(a.encrypt(&buffer), b.encrypt(&buffer));
    }

    #[test]
    fn permutation_is_a_bijection(seed in any::<u64>(), len in 0usize..500) {
        let mut table = permutation(seed, len);
        prop_assert_eq!(table.clone(), permutation(seed, len));
        table.sort_unstable();
        prop_assert_eq!(table, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn byte_ops_round_trip_at_every_key(buffer in buffer_strategy(), key in 0u64..=255) {
        for ops_list in ["xor", "add", "add:xor"] {
            let pipeline = Pipeline::parse(ops_list, key, "").unwrap();
            prop_assert_eq!(pipeline.decrypt(&pipeline.encrypt(&buffer)), buffer.clone());
        }
    }
}
