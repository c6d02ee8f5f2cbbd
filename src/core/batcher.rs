use crate::domain::model::{Batch, TargetRecord};
use crate::utils::error::{EtlError, Result};

/// Splits transformed records into contiguous, order-preserving batches of
/// at most `size` records. The last batch holds the remainder. Empty input
/// yields no batches; a zero size is a caller contract violation.
pub fn split(records: Vec<TargetRecord>, size: usize) -> Result<Vec<Batch>> {
    if size == 0 {
        return Err(EtlError::configuration(
            "batch_size",
            size,
            "must be a positive integer",
        ));
    }

    Ok(records
        .chunks(size)
        .enumerate()
        .map(|(i, chunk)| Batch {
            number: i + 1,
            records: chunk.to_vec(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::HashMap;

    fn records(count: usize) -> Vec<TargetRecord> {
        (1..=count)
            .map(|i| TargetRecord {
                fields: HashMap::from([("seq".to_string(), Value::from(i as u64))]),
            })
            .collect()
    }

    #[test]
    fn splits_into_full_batches_plus_remainder() {
        let batches = split(records(250), 100).unwrap();

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 100);
        assert_eq!(batches[1].len(), 100);
        assert_eq!(batches[2].len(), 50);
    }

    #[test]
    fn numbers_batches_in_split_order() {
        let batches = split(records(250), 100).unwrap();
        let numbers: Vec<usize> = batches.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn exact_division_leaves_no_remainder_batch() {
        let batches = split(records(200), 100).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[1].len(), 100);
    }

    #[test]
    fn empty_input_yields_no_batches() {
        let batches = split(Vec::new(), 100).unwrap();
        assert!(batches.is_empty());
    }

    #[test]
    fn zero_size_is_a_configuration_error() {
        let err = split(records(10), 0).unwrap_err();
        assert!(matches!(err, EtlError::Configuration { .. }));
    }

    #[test]
    fn conserves_records_and_their_order() {
        for len in 0..=25 {
            for size in 1..=7 {
                let input = records(len);
                let batches = split(input.clone(), size).unwrap();

                let total: usize = batches.iter().map(Batch::len).sum();
                assert_eq!(total, len);
                assert_eq!(batches.len(), len.div_ceil(size));

                let rejoined: Vec<TargetRecord> =
                    batches.into_iter().flat_map(|b| b.records).collect();
                assert_eq!(rejoined, input, "len={len} size={size}");
            }
        }
    }
}
