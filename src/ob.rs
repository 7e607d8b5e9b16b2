//! Reversible scrambling of planet-width values.
//!
//! Planets are not named by their raw number. The low 32 bits of any value at
//! or above `0x1_0000` are passed through a four round Feistel cipher keyed by
//! murmur3, so neighbouring planets get unrelated names. Galaxies and stars are
//! left untouched, and for moons only the low 32 bits are permuted.

const RAKU: [u32; 4] = [0xb76d_5eed, 0xee28_1300, 0x85bc_ae01, 0x4b38_7af7];

const UX_1_0000: u64 = 0x1_0000;
const UX_FFFF_FFFF: u64 = 0xffff_ffff;

const ROUNDS: u32 = 4;
const A: u64 = 0xffff;
const B: u64 = 0x1_0000;
const K: u64 = 0xffff_ffff;

/// 32-bit murmur3 (x86 variant).
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    const C1: u32 = 0xcc9e_2d51;
    const C2: u32 = 0x1b87_3593;

    let mut h = seed;
    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h ^= k;
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = chunks.remainder();
    let mut k = 0u32;
    if tail.len() >= 3 {
        k ^= (tail[2] as u32) << 16;
    }
    if tail.len() >= 2 {
        k ^= (tail[1] as u32) << 8;
    }
    if !tail.is_empty() {
        k ^= tail[0] as u32;
        k = k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h ^= k;
    }

    h ^= data.len() as u32;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Round function: murmur3 over the two low bytes of `arg`.
fn round_key(j: u64, arg: u64) -> u64 {
    let bytes = [(arg & 0xff) as u8, ((arg >> 8) & 0xff) as u8];
    murmur3_32(&bytes, RAKU[j as usize]) as u64
}

fn fe(m: u64) -> u64 {
    let mut ell = m % A;
    let mut arr = m / A;
    for j in 1..=ROUNDS as u64 {
        let eff = round_key(j - 1, arr);
        let tmp = if j % 2 != 0 {
            (ell + eff) % A
        } else {
            (ell + eff) % B
        };
        ell = arr;
        arr = tmp;
    }
    if ROUNDS % 2 != 0 || arr == A {
        A * arr + ell
    } else {
        A * ell + arr
    }
}

fn fen(m: u64) -> u64 {
    let (ahh, ale) = if ROUNDS % 2 != 0 {
        (m / A, m % A)
    } else {
        (m % A, m / A)
    };
    let (mut ell, mut arr) = if ale == A { (ahh, ale) } else { (ale, ahh) };
    for j in (1..=ROUNDS as u64).rev() {
        let eff = round_key(j - 1, ell);
        let tmp = if j % 2 != 0 {
            (arr + A - (eff % A)) % A
        } else {
            (arr + B - (eff % B)) % B
        };
        arr = ell;
        ell = tmp;
    }
    A * arr + ell
}

/// Cycle-walk so the permutation stays inside `0..K`.
fn feis(m: u64) -> u64 {
    let c = fe(m);
    if c < K {
        c
    } else {
        fe(c)
    }
}

fn tail(m: u64) -> u64 {
    let c = fen(m);
    if c < K {
        c
    } else {
        fen(c)
    }
}

/// Scramble a value before rendering it as `@p`.
pub fn fein(pyn: u64) -> u64 {
    if (UX_1_0000..=UX_FFFF_FFFF).contains(&pyn) {
        UX_1_0000 + feis(pyn - UX_1_0000)
    } else if pyn > UX_FFFF_FFFF {
        (pyn & !UX_FFFF_FFFF) | fein(pyn & UX_FFFF_FFFF)
    } else {
        pyn
    }
}

/// Inverse of [`fein`].
pub fn fynd(cry: u64) -> u64 {
    if (UX_1_0000..=UX_FFFF_FFFF).contains(&cry) {
        UX_1_0000 + tail(cry - UX_1_0000)
    } else if cry > UX_FFFF_FFFF {
        (cry & !UX_FFFF_FFFF) | fynd(cry & UX_FFFF_FFFF)
    } else {
        cry
    }
}
