use super::*;

impl CellBuffer {
    // === Raw view for the renderer ===

    /// Packed bytes, borrowed. Valid until the owner reallocates on resize.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Raw pointer for JS interop (wasm memory offset).
    pub fn cells_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    // === Cell access by linear index ===
    #[inline]
    pub fn is_alive_idx(&self, idx: usize) -> bool {
        bits::check_bit(&self.bytes, idx)
    }

    #[inline]
    pub fn set_idx(&mut self, idx: usize, alive: bool) {
        bits::put_bit(&mut self.bytes, idx, alive);
    }

    #[inline]
    pub fn flip_idx(&mut self, idx: usize) {
        bits::flip_bit(&mut self.bytes, idx);
    }

    // === Cell access by coordinates (caller checks bounds) ===
    #[inline]
    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.is_alive_idx(self.index(row, col))
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        bits::count_ones(&self.bytes, self.size)
    }
}
