// Shared tuning constants for the particle layers, pointer follower and
// contact form guard. Per-frame values are expressed against a 60 Hz frame.

// Frame timing
pub const REFERENCE_FPS: f32 = 60.0;
pub const MAX_FRAMES_PER_STEP: f32 = 4.0; // clamp after a hidden tab resumes

// Ambient blobs
pub const BLOB_COUNT: usize = 6;
pub const BLOB_RADIUS_MIN: f32 = 180.0;
pub const BLOB_RADIUS_MAX: f32 = 360.0;
pub const BLOB_SPEED_MAX: f32 = 0.4; // px per frame, each axis

// Wave
pub const WAVE_COUNT: usize = 90;
pub const WAVE_RADIUS_MIN: f32 = 1.0;
pub const WAVE_RADIUS_MAX: f32 = 3.0;
pub const WAVE_DRIFT_MAX: f32 = 0.35;
pub const WAVE_AMPLITUDE: f32 = 28.0;
pub const WAVE_FREQUENCY: f32 = 0.02; // radians per frame
pub const WAVE_BAND_MIN: f32 = 0.55; // fraction of height where the band starts
pub const WAVE_BAND_MAX: f32 = 0.85;

// Pointer trail
pub const TRAIL_DECAY: f32 = 0.96;
pub const TRAIL_SPEED_DECAY: f32 = 0.95;
pub const TRAIL_ALPHA_THRESHOLD: f32 = 0.05;
pub const TRAIL_RADIUS_MIN: f32 = 2.0;
pub const TRAIL_RADIUS_MAX: f32 = 6.0;
pub const TRAIL_SPEED_MIN: f32 = 0.5;
pub const TRAIL_SPEED_MAX: f32 = 2.0;
pub const TRAIL_MAX_PARTICLES: usize = 160;

// Palette (RGBA, alpha as 0..1)
pub const BLOB_PALETTE: [[f32; 4]; 4] = [
    [139.0, 92.0, 246.0, 0.35], // violet
    [59.0, 130.0, 246.0, 0.30], // blue
    [236.0, 72.0, 153.0, 0.25], // pink
    [20.0, 184.0, 166.0, 0.25], // teal
];
pub const WAVE_PALETTE: [[f32; 4]; 2] = [[147.0, 197.0, 253.0, 0.6], [196.0, 181.0, 253.0, 0.5]];
pub const TRAIL_PALETTE: [[f32; 4]; 3] = [
    [167.0, 139.0, 250.0, 1.0],
    [96.0, 165.0, 250.0, 1.0],
    [244.0, 114.0, 182.0, 1.0],
];

// Pointer spring (critically damped when damping = 2 * sqrt(stiffness * mass))
pub const CURSOR_STIFFNESS: f32 = 400.0;
pub const CURSOR_MASS: f32 = 1.0;
pub const CURSOR_DAMPING: f32 = 40.0;
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_DT_SEC: f32 = 0.1;
pub const CURSOR_GRACE_SEC: f32 = 0.5;
pub const CURSOR_OFFSCREEN: [f32; 2] = [-100.0, -100.0];
pub const CURSOR_HOVER_SCALE: f32 = 1.5;
pub const CURSOR_PRESS_SCALE: f32 = 0.8;

// Magnetic / tilt / parallax
pub const MAGNETIC_STRENGTH: f32 = 0.3;
pub const MAGNETIC_STIFFNESS: f32 = 150.0;
pub const MAGNETIC_DAMPING: f32 = 24.5;
pub const TILT_MAX_DEG: f32 = 10.0;
pub const PARALLAX_SPEED: f32 = 0.3;

// Contact form guard
pub const RATE_LIMIT_MAX_ATTEMPTS: u32 = 5;
pub const RATE_LIMIT_WINDOW_SECS: u64 = 15 * 60;
pub const SANITIZE_MAX_CHARS: usize = 1000;

// Analytics
pub const SCROLL_MILESTONES: [u8; 4] = [25, 50, 75, 100];
