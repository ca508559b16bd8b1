use block_buffer::byteorder::{ByteOrder, BE};
use block_buffer::BlockBuffer;
use digest::generic_array::typenum::{U32, U64};
use digest::generic_array::GenericArray;
use digest::{BlockInput, FixedOutput, Input, Reset};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::consts::{BLOCK_LEN, DIGEST_LEN, IV, STATE_LEN};
#[cfg(feature = "alloc")]
use crate::error::Error;
use crate::utils::compress256;

type BlockSize = U64;
type Block = GenericArray<u8, BlockSize>;

#[derive(Clone)]
struct EngineState {
    h: [u32; STATE_LEN],
}

impl EngineState {
    fn new() -> EngineState {
        EngineState { h: IV }
    }

    fn process_block(&mut self, block: &Block) {
        let block = unsafe { &*(block.as_ptr() as *const [u8; BLOCK_LEN]) };
        compress256(&mut self.h, block);
    }
}

#[derive(Clone)]
struct Engine {
    /// Bytes absorbed since the last reset.
    len: u64,
    buffer: BlockBuffer<BlockSize>,
    state: EngineState,
}

impl Engine {
    fn new() -> Engine {
        Engine {
            len: 0,
            buffer: Default::default(),
            state: EngineState::new(),
        }
    }

    fn input(&mut self, input: &[u8]) {
        self.len = self.len.wrapping_add(input.len() as u64);
        let self_state = &mut self.state;
        self.buffer
            .input(input, |block| self_state.process_block(block));
    }

    /// Pads, compresses the trailing block(s) and writes the digest into
    /// `out`, then returns to the initial state.
    fn finish(&mut self, out: &mut [u8]) {
        let self_state = &mut self.state;
        let bit_len = self.len.wrapping_mul(8);
        self.buffer
            .len64_padding::<BE, _>(bit_len, |block| self_state.process_block(block));
        BE::write_u32_into(&self.state.h, out);
        self.reset();
    }

    fn reset(&mut self) {
        self.len = 0;
        self.buffer.reset();
        self.state = EngineState::new();
    }
}

/// Streaming SM3 hasher.
///
/// The state lives inline; instances are cheap to clone, and a clone
/// continues independently from the same point of the message.
#[derive(Clone)]
pub struct Sm3 {
    engine: Engine,
}

impl Sm3 {
    pub fn new() -> Self {
        Sm3 {
            engine: Engine::new(),
        }
    }

    /// Digest size in bytes.
    pub fn size(&self) -> usize {
        DIGEST_LEN
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> usize {
        BLOCK_LEN
    }

    /// Number of bytes written since construction or the last reset.
    pub fn total_len(&self) -> u64 {
        self.engine.len
    }

    /// Discards everything written so far.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Absorbs `data`, returning the number of bytes accepted, which is
    /// always `data.len()`.
    pub fn write(&mut self, data: &[u8]) -> usize {
        self.engine.input(data);
        data.len()
    }

    /// Returns the digest of everything written since the last reset and
    /// resets the hasher.
    pub fn finalize(&mut self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        self.engine.finish(&mut out);
        out
    }

    /// Appends the digest to `out` and resets the hasher.
    ///
    /// Space is reserved before finalizing, so on `Err` neither `out` nor
    /// the hasher has been modified.
    #[cfg(feature = "alloc")]
    pub fn finalize_into_vec(&mut self, out: &mut Vec<u8>) -> Result<(), Error> {
        out.try_reserve_exact(DIGEST_LEN)?;
        out.extend_from_slice(&self.finalize());
        Ok(())
    }
}

/// Computes the SM3 digest of `data` in one call.
pub fn hash(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sm3::new();
    hasher.write(data);
    hasher.finalize()
}

impl Default for Sm3 {
    fn default() -> Self {
        Sm3::new()
    }
}

impl BlockInput for Sm3 {
    type BlockSize = BlockSize;
}

impl Input for Sm3 {
    fn input<B: AsRef<[u8]>>(&mut self, input: B) {
        self.engine.input(input.as_ref());
    }
}

impl FixedOutput for Sm3 {
    type OutputSize = U32;

    fn fixed_result(mut self) -> GenericArray<u8, Self::OutputSize> {
        let mut out = GenericArray::default();
        self.engine.finish(out.as_mut_slice());
        out
    }
}

impl Reset for Sm3 {
    fn reset(&mut self) {
        self.engine.reset();
    }
}

opaque_debug::impl_opaque_debug!(Sm3);
#[cfg(feature = "std")]
digest::impl_write!(Sm3);
