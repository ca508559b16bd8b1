use block_buffer::byteorder::{ByteOrder, BE};

use crate::consts::{BLOCK_LEN, STATE_LEN, T_0, T_1};

#[inline(always)]
fn ff0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn ff1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
fn gg0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn gg1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Message expansion, GM/T 0004-2012 section 5.3.2.
///
/// Produces `W[0..68]`; `W'[j]` is derived on the fly as `W[j] ^ W[j + 4]`.
fn expand(block: &[u8; BLOCK_LEN]) -> [u32; 68] {
    let mut w = [0u32; 68];
    BE::read_u32_into(block, &mut w[..16]);
    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }
    w
}

// One round of CF. The register shuffle is done by renaming, so the macro
// takes the eight registers in their current order.
macro_rules! round {
    ($w:ident, $j:expr, $t:expr, $ff:ident, $gg:ident,
     $a:ident, $b:ident, $c:ident, $d:ident,
     $e:ident, $f:ident, $g:ident, $h:ident) => {{
        let a12 = $a.rotate_left(12);
        let ss1 = a12
            .wrapping_add($e)
            .wrapping_add($t.rotate_left($j as u32))
            .rotate_left(7);
        let ss2 = ss1 ^ a12;
        let tt1 = $ff($a, $b, $c)
            .wrapping_add($d)
            .wrapping_add(ss2)
            .wrapping_add($w[$j] ^ $w[$j + 4]);
        let tt2 = $gg($e, $f, $g)
            .wrapping_add($h)
            .wrapping_add(ss1)
            .wrapping_add($w[$j]);
        $d = $c;
        $c = $b.rotate_left(9);
        $b = $a;
        $a = tt1;
        $h = $g;
        $g = $f.rotate_left(19);
        $f = $e;
        $e = p0(tt2);
    }};
}

/// CF: compress function
///
/// Absorbs one 64-byte block into `state`.
pub fn compress256(state: &mut [u32; STATE_LEN], block: &[u8; BLOCK_LEN]) {
    let w = expand(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for j in 0..16 {
        round!(w, j, T_0, ff0, gg0, a, b, c, d, e, f, g, h);
    }
    for j in 16..64 {
        round!(w, j, T_1, ff1, gg1, a, b, c, d, e, f, g, h);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h].iter()) {
        *s ^= *v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::IV;

    #[test]
    fn boolean_functions_agree_on_first_rounds() {
        let (x, y, z) = (0xdead_beef, 0x0123_4567, 0x89ab_cdef);
        assert_eq!(ff0(x, y, z), gg0(x, y, z));
        // majority and choose on identical inputs collapse to the input
        assert_eq!(ff1(x, x, x), x);
        assert_eq!(gg1(x, y, y), y);
        assert_eq!(gg1(u32::max_value(), y, z), y);
        assert_eq!(gg1(0, y, z), z);
    }

    #[test]
    fn permutations_are_linear() {
        let (x, y) = (0x1234_5678, 0x9abc_def0);
        assert_eq!(p0(x ^ y), p0(x) ^ p0(y));
        assert_eq!(p1(x ^ y), p1(x) ^ p1(y));
        assert_eq!(p0(0), 0);
        assert_eq!(p1(0), 0);
    }

    #[test]
    fn expansion_keeps_message_words() {
        let mut block = [0u8; BLOCK_LEN];
        for (i, b) in block.iter_mut().enumerate() {
            *b = i as u8;
        }
        let w = expand(&block);
        assert_eq!(w[0], 0x0001_0203);
        assert_eq!(w[15], 0x3c3d_3e3f);
        assert_eq!(
            w[16],
            p1(w[0] ^ w[7] ^ w[13].rotate_left(15)) ^ w[3].rotate_left(7) ^ w[10]
        );
    }

    #[test]
    fn compress_padded_abc() {
        // "abc" padded to a single block
        let mut block = [0u8; BLOCK_LEN];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 24;

        let mut state = IV;
        compress256(&mut state, &block);
        assert_eq!(
            state,
            [
                0x66c7_f0f4,
                0x62ee_edd9,
                0xd1f2_d46b,
                0xdc10_e4e2,
                0x4167_c487,
                0x5cf2_f7a2,
                0x297d_a02b,
                0x8f4b_a8e0,
            ]
        );
    }
}
