use parquetgen_bitpack::*;

use test_helpers::*;

// ====== Layout ======

#[test]
fn test_parquet_width_three_example() {
    let packer = BitPacker::new(3).unwrap();
    let packed = packer.pack(3, &[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
    assert_eq!(packed, vec![0x88, 0xC6, 0xFA]);
}

#[test]
fn test_output_is_exactly_width_bytes() {
    let packer = full_packer();
    for width in 1..=64u8 {
        let packed = packer.pack(width, &[max_value(width); GROUP_SIZE]).unwrap();
        assert_eq!(packed.len(), width as usize);
        // every bit of the group is in use
        assert!(packed.iter().all(|&b| b == 0xFF), "width {}", width);
    }
}

#[test]
fn test_high_bits_are_dropped() {
    let packer = BitPacker::new(2).unwrap();
    let packed = packer.pack(2, &[0b111, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    assert_eq!(packed, vec![0b11, 0]);
    assert_eq!(packer.unpack(2, &packed).unwrap()[0], 0b11);
}

// ====== Round Trips ======

#[test]
fn test_every_value_round_trips_at_small_widths() {
    let packer = BitPacker::new(2).unwrap();
    for width in 1..=2u8 {
        let limit = 1u64 << width;
        for value in 0..limit {
            for position in 0..GROUP_SIZE {
                let mut group = [0u64; GROUP_SIZE];
                group[position] = value;
                let packed = packer.pack(width, &group).unwrap();
                assert_eq!(packer.unpack(width, &packed).unwrap(), group);
            }
        }
    }
}

#[test]
fn test_random_groups_round_trip_at_every_width() {
    let packer = full_packer();
    let mut rng = seeded_rng();
    for width in 1..=64u8 {
        for _ in 0..32 {
            let group = random_group(&mut rng, width);
            let packed = packer.pack(width, &group).unwrap();
            assert_eq!(packer.unpack(width, &packed).unwrap(), group, "width {}", width);
        }
    }
}

#[test]
fn test_pack_all_pads_the_last_group() {
    let packer = BitPacker::new(3).unwrap();
    let values: Vec<u64> = (0..10).map(|v| v % 8).collect();
    let packed = packer.pack_all(3, &values).unwrap();

    assert_eq!(packed.len(), 6);
    assert_eq!(&packed[..3], &[0x88, 0xC6, 0xFA]);
    assert_eq!(packer.unpack(3, &packed[3..]).unwrap(), [0, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(packer.unpack_all(3, &packed, values.len()).unwrap(), values);
}

#[test]
fn test_pack_all_random_runs() {
    let packer = full_packer();
    let mut rng = seeded_rng();
    for (width, count) in [(1u8, 1usize), (5, 17), (13, 64), (33, 9), (64, 100)] {
        let values: Vec<u64> = (0..count.div_ceil(GROUP_SIZE))
            .flat_map(|_| random_group(&mut rng, width))
            .take(count)
            .collect();
        let packed = packer.pack_all(width, &values).unwrap();
        assert_eq!(packed.len(), count.div_ceil(GROUP_SIZE) * width as usize);
        assert_eq!(packer.unpack_all(width, &packed, count).unwrap(), values);
    }
}

#[test]
fn test_empty_run() {
    let packer = BitPacker::new(3).unwrap();
    assert!(packer.pack_all(3, &[]).unwrap().is_empty());
    assert!(packer.unpack_all(3, &[], 0).unwrap().is_empty());
}

#[test]
fn test_definition_levels_use_bit_width() {
    // levels of a column whose deepest leaf has three optional ancestors
    let width = bit_width(3);
    assert_eq!(width, 2);

    let packer = BitPacker::new(width).unwrap();
    let levels = [3, 0, 1, 2, 3, 3, 0, 2];
    let packed = packer.pack(width, &levels).unwrap();
    assert_eq!(packed.len(), 2);
    assert_eq!(packer.unpack(width, &packed).unwrap(), levels);
}

// ====== Errors ======

#[test]
fn test_width_outside_tables() {
    let packer = BitPacker::new(3).unwrap();
    let group = [0u64; GROUP_SIZE];

    assert_eq!(
        packer.pack(0, &group),
        Err(BitPackError::UnsupportedWidth {
            width: 0,
            max_width: 3
        })
    );
    assert_eq!(
        packer.pack(4, &group),
        Err(BitPackError::UnsupportedWidth {
            width: 4,
            max_width: 3
        })
    );
    assert!(packer.unpack(9, &[0; 9]).is_err());
    assert!(packer.pack_all(65, &[1]).is_err());
}

#[test]
fn test_wrong_byte_count() {
    let packer = BitPacker::new(3).unwrap();
    assert_eq!(
        packer.unpack(3, &[0x88, 0xC6]),
        Err(BitPackError::InvalidLength {
            expected: 3,
            actual: 2
        })
    );
    assert_eq!(
        packer.unpack_all(3, &[0; 3], 9),
        Err(BitPackError::InvalidLength {
            expected: 6,
            actual: 3
        })
    );
}

#[test]
fn test_unaddressable_count() {
    let packer = BitPacker::new(16).unwrap();
    assert_eq!(
        packer.unpack_all(16, &[], usize::MAX),
        Err(BitPackError::InvalidLength {
            expected: usize::MAX,
            actual: 0
        })
    );
    assert!(packer.unpack_all(1, &[0; 4], usize::MAX).is_err());
}

#[test]
fn test_invalid_max_width() {
    assert_eq!(BitPacker::new(0).unwrap_err(), BitPackError::InvalidMaxWidth(0));
    assert_eq!(BitPacker::new(65).unwrap_err(), BitPackError::InvalidMaxWidth(65));
}

// ====== Configuration ======

#[test]
fn test_config_from_json() {
    let config: BitPackerConfig = serde_json::from_str(r#"{"max_width": 12}"#).unwrap();
    let packer = BitPacker::from_config(&config).unwrap();
    assert_eq!(packer.max_width(), 12);
    assert!(packer.pack(12, &[4095; GROUP_SIZE]).is_ok());
    assert!(packer.pack(13, &[0; GROUP_SIZE]).is_err());
}

#[test]
fn test_config_defaults() {
    let config: BitPackerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, BitPackerConfig::default());
    assert_eq!(config.max_width, DEFAULT_MAX_WIDTH);

    let packer = BitPacker::from_config(&config).unwrap();
    assert_eq!(packer.max_width(), 3);

    let json = serde_json::to_string(&BitPackerConfig::new().with_max_width(7)).unwrap();
    assert_eq!(json, r#"{"max_width":7}"#);
}

#[test]
fn test_packer_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BitPacker>();
}
