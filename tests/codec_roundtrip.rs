use quickcheck::quickcheck;
use planetsieve::{num_to_patp, num_to_patq, patp_to_num, patq_to_num, IdentifierCodec, PatpCodec, Tier};

quickcheck! {
    fn patp_roundtrip(value: u64) -> bool {
        patp_to_num(&num_to_patp(value)) == Ok(value)
    }
}

quickcheck! {
    fn patq_roundtrip(value: u64) -> bool {
        patq_to_num(&num_to_patq(value)) == Ok(value)
    }
}

quickcheck! {
    fn rendered_names_are_valid(value: u32) -> bool {
        let name = num_to_patp(value as u64);
        PatpCodec.is_valid_identifier(&name) && name.starts_with('~')
    }
}

#[test]
fn tier_edges() {
    let edges = [
        (0u64, Tier::Galaxy),
        (0xff, Tier::Galaxy),
        (0x100, Tier::Star),
        (0xffff, Tier::Star),
        (0x1_0000, Tier::Planet),
        (0xffff_ffff, Tier::Planet),
        (0x1_0000_0000, Tier::Moon),
        (u64::MAX, Tier::Moon),
    ];
    for (value, tier) in edges {
        let name = num_to_patp(value);
        assert_eq!(PatpCodec.tier(&name), Ok(tier), "{name}");
    }
}

#[test]
fn planets_render_as_two_groups() {
    for value in [0x1_0000u64, 0x1_0100, 0xdead_beef, 0xffff_ffff] {
        let name = num_to_patp(value);
        assert_eq!(name.len(), 14, "{name}");
        assert_eq!(name.matches('-').count(), 1, "{name}");
    }
}

#[test]
fn moons_render_as_four_groups() {
    let name = num_to_patp(0x0102_0304_0506_0708);
    assert_eq!(name.matches('-').count(), 3, "{name}");
    assert_eq!(patp_to_num(&name), Ok(0x0102_0304_0506_0708));
}
