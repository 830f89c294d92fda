// port.rs models the hardware-visible register triplet that is the sole way
// into VRAM: an address register, an auto-increment step register, and a
// read/write data register.
//
// The register pair is transient session state. Every drawing primitive
// reprograms it before issuing data operations and assumes nothing about its
// value on entry or after return.

/// Byte offset into VRAM, as held by the 16-bit address register.
pub type Address = u16;

/// Auto-increment applied to the address register after each data access.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Stay on the current byte. Required for read-modify-write, where the
    /// read and the write-back must target the same byte.
    Hold = 0,
    /// Advance one byte per write. Required for bulk sequential fills.
    Advance = 1,
}

impl From<u8> for Step {
    fn from(value: u8) -> Self {
        match value {
            0 => Step::Hold,
            _ => Step::Advance,
        }
    }
}

/// Ordered, synchronous channel to VRAM bytes.
///
/// Register writes themselves cannot fail; staying inside the surface is the
/// caller's contract and is enforced by the framebuffer layer before any data
/// operation is issued.
pub trait PixelPort {
    /// Program the starting byte offset for subsequent data operations.
    fn set_address(&mut self, addr: Address);

    /// Program the auto-increment applied after each data write.
    fn set_step(&mut self, step: Step);

    /// One data-port write. Advances the internal address by the programmed
    /// step as a side effect.
    fn write_byte(&mut self, value: u8);

    /// Read the current byte, clear the bits in `mask`, OR in `value`, and
    /// write the result back to the same byte.
    ///
    /// Requires the step register to hold `Step::Hold`, otherwise the read
    /// and the write-back would target different bytes.
    fn read_modify_write(&mut self, mask: u8, value: u8);
}

/// Emulated VRAM behind the register triplet.
///
/// The address counter wraps at the VRAM length, the way a hardware address
/// register wraps at its width.
pub struct VideoRam {
    contents: Vec<u8>,
    address: Address,
    step: Step,
}

impl VideoRam {
    pub fn new(byte_count: usize) -> Self {
        Self {
            contents: vec![0u8; byte_count],
            address: 0,
            step: Step::Hold,
        }
    }

    /// The raw packed pixel bytes, for presentation and read-back.
    pub fn frame(&self) -> &[u8] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    #[inline(always)]
    fn cursor(&self) -> usize {
        self.address as usize % self.contents.len()
    }
}

impl PixelPort for VideoRam {
    fn set_address(&mut self, addr: Address) {
        self.address = addr;
    }

    fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    fn write_byte(&mut self, value: u8) {
        let cursor = self.cursor();
        self.contents[cursor] = value;
        self.address = self.address.wrapping_add(self.step as Address);
    }

    fn read_modify_write(&mut self, mask: u8, value: u8) {
        debug_assert_eq!(self.step, Step::Hold, "read-modify-write with a stepping address");
        let cursor = self.cursor();
        self.contents[cursor] = (self.contents[cursor] & !mask) | (value & mask);
    }
}

/// Fake port that records the register-write sequence instead of backing it
/// with memory. Reads in read-modify-write see zero.
#[cfg(test)]
pub(crate) struct RecordingPort {
    pub ops: Vec<PortOp>,
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PortOp {
    Address(Address),
    Step(Step),
    Write(u8),
    Rmw(u8, u8),
}

#[cfg(test)]
impl RecordingPort {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }
}

#[cfg(test)]
impl PixelPort for RecordingPort {
    fn set_address(&mut self, addr: Address) {
        self.ops.push(PortOp::Address(addr));
    }

    fn set_step(&mut self, step: Step) {
        self.ops.push(PortOp::Step(step));
    }

    fn write_byte(&mut self, value: u8) {
        self.ops.push(PortOp::Write(value));
    }

    fn read_modify_write(&mut self, mask: u8, value: u8) {
        self.ops.push(PortOp::Rmw(mask, value));
    }
}
