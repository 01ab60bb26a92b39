/// Property tests for the wire codec and batch framer: every valid record
/// survives encode/decode unchanged, sizes depend only on the kind, and
/// batches of arbitrary record sequences re-split exactly.
use proptest::prelude::*;

use replink_shared::{
    decode_action_array, frame_action_batch, frame_transform_batch, ActionInvoke, Batch,
    ByteReader, ByteWriter, EntityId, TransformKind, TransformUpdate,
};

fn entity_id() -> impl Strategy<Value = EntityId> {
    proptest::array::uniform12(any::<u8>()).prop_map(EntityId::from_bytes)
}

fn component() -> impl Strategy<Value = f32> {
    // NaN never round-trips through equality, and the codec moves raw bits
    // anyway; plain finite values are the interesting cases.
    -1.0e6f32..1.0e6f32
}

fn position() -> impl Strategy<Value = [f32; 3]> {
    proptest::array::uniform3(component())
}

fn rotation() -> impl Strategy<Value = [f32; 4]> {
    proptest::array::uniform4(component())
}

fn transform_update() -> impl Strategy<Value = TransformUpdate> {
    prop_oneof![
        (entity_id(), position(), rotation()).prop_map(|(id, position, rotation)| {
            TransformUpdate::Full {
                id,
                position,
                rotation,
            }
        }),
        (entity_id(), position()).prop_map(|(id, position)| TransformUpdate::PositionOnly {
            id,
            position,
        }),
        (entity_id(), rotation()).prop_map(|(id, rotation)| TransformUpdate::RotationOnly {
            id,
            rotation,
        }),
    ]
}

fn action_invoke() -> impl Strategy<Value = ActionInvoke> {
    (entity_id(), any::<u32>()).prop_map(|(id, index)| ActionInvoke::new(id, index))
}

proptest! {
    #[test]
    fn transform_record_round_trips(record in transform_update()) {
        let mut writer = ByteWriter::new();
        record.ser(&mut writer);
        let bytes = writer.to_bytes();

        let mut reader = ByteReader::new(&bytes);
        let decoded = TransformUpdate::de(&mut reader).unwrap();
        prop_assert_eq!(decoded, record);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn transform_size_is_a_pure_function_of_kind(record in transform_update()) {
        let mut writer = ByteWriter::new();
        record.ser(&mut writer);

        let expected = match record.kind() {
            TransformKind::Full => 41,
            TransformKind::PositionOnly => 25,
            TransformKind::RotationOnly => 29,
        };
        prop_assert_eq!(writer.len(), expected);
        prop_assert_eq!(record.encoded_len(), expected);
    }

    #[test]
    fn action_record_round_trips(record in action_invoke()) {
        let mut writer = ByteWriter::new();
        record.ser(&mut writer);
        let bytes = writer.to_bytes();
        prop_assert_eq!(bytes.len(), ActionInvoke::WIRE_SIZE);

        let mut reader = ByteReader::new(&bytes);
        prop_assert_eq!(ActionInvoke::de(&mut reader).unwrap(), record);
    }

    #[test]
    fn transform_batch_round_trips_in_order(records in proptest::collection::vec(transform_update(), 0..32)) {
        let payload = frame_transform_batch(&records);
        prop_assert_eq!(
            payload.len(),
            1 + records.iter().map(TransformUpdate::encoded_len).sum::<usize>()
        );
        prop_assert_eq!(Batch::parse(&payload).unwrap(), Batch::Transforms(records));
    }

    #[test]
    fn action_batch_round_trips_in_order(records in proptest::collection::vec(action_invoke(), 0..64)) {
        let payload = frame_action_batch(&records);
        prop_assert_eq!(payload.len(), 1 + records.len() * ActionInvoke::WIRE_SIZE);
        prop_assert_eq!(Batch::parse(&payload).unwrap(), Batch::Actions(records));
    }

    #[test]
    fn action_array_decode_matches_record_count(records in proptest::collection::vec(action_invoke(), 0..64)) {
        let mut writer = ByteWriter::new();
        for record in &records {
            record.ser(&mut writer);
        }
        let decoded = decode_action_array(&writer.to_bytes()).unwrap();
        prop_assert_eq!(decoded, records);
    }
}
