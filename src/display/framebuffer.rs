// Screen Buffer - RGBA pixel data handed to the window each frame
//
// The Game Boy LCD is 160×144 pixels. The renderer writes finished frames here
// as row-major RGBA8888 bytes; the window uploads the buffer to its texture
// without any conversion.

/// Screen width in pixels
pub const COLS: usize = 160;

/// Screen height in pixels
pub const ROWS: usize = 144;

/// Bytes per pixel (R, G, B, A)
pub const BYTES_PER_PIXEL: usize = 4;

/// Bytes per row of the screen buffer
pub const PITCH: usize = COLS * BYTES_PER_PIXEL;

/// Total size of the screen buffer in bytes
pub const SCREEN_BYTES: usize = PITCH * ROWS;

/// Opaque black
const BLACK: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];

/// Four-shade green palette used by the test patterns
const SHADES: [[u8; 4]; 4] = [
    [0xE0, 0xF8, 0xD0, 0xFF],
    [0x88, 0xC0, 0x70, 0xFF],
    [0x34, 0x68, 0x56, 0xFF],
    [0x08, 0x18, 0x20, 0xFF],
];

/// Screen buffer holding one finished frame
///
/// Always exactly `SCREEN_BYTES` long, so anything that uploads it can rely
/// on the 160×144 layout with a row pitch of `PITCH` bytes.
#[derive(Clone)]
pub struct ScreenBuffer {
    bytes: Box<[u8]>,
}

impl ScreenBuffer {
    /// Create a new screen buffer initialized to opaque black
    pub fn new() -> Self {
        let mut buffer = Self {
            bytes: vec![0; SCREEN_BYTES].into_boxed_slice(),
        };
        buffer.clear(BLACK);
        buffer
    }

    /// Set a pixel at the given coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let offset = Self::offset(x, y);
        self.bytes[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    /// Get a pixel at the given coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let offset = Self::offset(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.bytes[offset..offset + BYTES_PER_PIXEL]);
        rgba
    }

    /// Fill the whole screen with one color
    pub fn clear(&mut self, rgba: [u8; 4]) {
        for pixel in self.bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&rgba);
        }
    }

    /// Get the raw RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get mutable access to the raw RGBA bytes
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Draw a diagonal stripe pattern that scrolls one pixel per frame
    pub fn test_pattern(&mut self, frame: u64) {
        let shift = (frame % (COLS as u64)) as usize;
        for y in 0..ROWS {
            for x in 0..COLS {
                let band = ((x + y + shift) / 16) % SHADES.len();
                self.set_pixel(x, y, SHADES[band]);
            }
        }
    }

    #[inline]
    fn offset(x: usize, y: usize) -> usize {
        assert!(x < COLS, "X coordinate {} out of bounds", x);
        assert!(y < ROWS, "Y coordinate {} out of bounds", y);
        y * PITCH + x * BYTES_PER_PIXEL
    }
}

impl Default for ScreenBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScreenBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenBuffer")
            .field("cols", &COLS)
            .field("rows", &ROWS)
            .finish()
    }
}
