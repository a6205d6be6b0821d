use lfsr_core::keystream::{build_byte, fill_candidate, fill_keystream};
use lfsr_core::score::entropy;
use lfsr_core::BitOrder;

#[test]
fn four_of_each_byte_is_eight_bits() {
    let sample: Vec<u8> = (0..1024u32).map(|i| (i / 4) as u8).collect();
    assert!((entropy(&sample) - 8.0).abs() < 1e-9);
}

#[test]
fn zero_sample_is_zero_bits() {
    assert_eq!(entropy(&[0u8; 1024]), 0.0);
}

#[test]
fn mask_8001_tap_0_leaves_sample_untouched() {
    // 0x80000001 truncated to the 16-bit register
    let mask = 0x8000_0001u32 as u16;
    assert_eq!(mask, 0x8001);

    let sample: Vec<u8> = (0..1024u32).map(|i| (i.wrapping_mul(2654435761) >> 24) as u8).collect();
    for seed in [1u16, 0x1234, 0xFFFF] {
        let mut state = seed;
        for _ in 0..64 {
            let (b, next) = build_byte(state, mask, 0);
            assert_eq!(b, 0);
            state = next;
        }

        let mut cand = vec![0u8; 1024];
        fill_candidate(&sample, seed, mask, 0, BitOrder::MsbFirst, &mut cand);
        assert_eq!(cand, sample);
        assert_eq!(entropy(&cand), entropy(&sample));
    }
}

#[test]
fn keystream_continuity_matters() {
    // Restarting every byte from the seed repeats one byte forever.
    let mut threaded = [0u8; 16];
    fill_keystream(1, 0xB400, 0xFFFF, BitOrder::MsbFirst, &mut threaded);
    let (first, _) = build_byte(1, 0xB400, 0xFFFF);
    assert_eq!(threaded[0], first);
    assert!(threaded.iter().any(|&b| b != first));
}
