/// Hero choreography and page-shell tuning constants.
///
/// Rates are exponential-approach rates per second; times are seconds unless
/// the name says otherwise.
// Frame dt clamp (seconds); the upper bound absorbs tab-refocus spikes
pub const MIN_FRAME_DT: f32 = 1e-4;
pub const MAX_FRAME_DT: f32 = 0.1;

// Phase sequencer
pub const PHASE_COOLDOWN_MS: f64 = 800.0; // min time between accepted transitions
pub const PIN_TOLERANCE_PX: f64 = 10.0; // |section top| below this counts as pinned
pub const RELEASE_DELAY_MS: i32 = 900; // delay before the released marker is applied

// Smoothing rates (1/s)
pub const PHASE_RATE: f32 = 5.0;
pub const POINTER_RATE: f32 = 5.0;
pub const VELOCITY_RATE: f32 = 8.0;
pub const ROTATION_RATE: f32 = 3.0;
pub const INFLUENCE_RATE: f32 = 2.0;

// Scripted focus points (normalized device coords) for the copy phases
pub const PHASE_ONE_FOCUS: [f32; 2] = [-0.1, 0.0];
pub const PHASE_TWO_FOCUS: [f32; 2] = [0.3, 0.0];

// Reveal radius multipliers
pub const INFLUENCE_BASE: f32 = 1.0;
pub const INFLUENCE_FOCUSED: f32 = 1.5;

// Intro assembly
pub const INTRO_DELAY_SEC: f32 = 0.5;
pub const INTRO_RATE: f32 = 1.5; // progress per second once started

// Scale spring
pub const SPRING_STIFFNESS: f32 = 80.0;
pub const SPRING_DAMPING: f32 = 15.0;
pub const SPRING_MAX_SUBSTEP: f32 = 1.0 / 120.0;

// Late-phase growth
pub const GROW_PHASE_START: f32 = 2.2;
pub const GROW_PHASE_SPAN_RATE: f32 = 2.0;
pub const GROW_AMOUNT: f32 = 0.3;

// Layout (world units on the z=0 plane)
pub const SIDE_OFFSET_FRACTION: f32 = 0.15; // of the visible viewport width
pub const POINTER_OFFSET: f32 = 0.2;
pub const BOB_AMPLITUDE: f32 = 0.05;
pub const BOB_FREQUENCY: f32 = 0.4;

// Rotation
pub const REST_PITCH: f32 = 0.15;
pub const REST_YAW: f32 = 0.4;
pub const REST_ROLL: f32 = 0.02;
pub const POINTER_TILT: f32 = 0.08;

// Corner markers
pub const CORNER_EXTENT: f32 = 1.62;
pub const CORNER_COLLAPSED: f32 = 0.1; // fraction of the extent before assembly
pub const MARKER_COLLAPSED_SCALE: f32 = 0.05;
pub const MARKER_COLLAPSED_DEPTH: f32 = 0.01;
pub const BREATH_AMPLITUDE: f32 = 0.02;
pub const BREATH_FREQUENCY: f32 = 1.5;
pub const MARKER_ARM_LENGTH: f32 = 0.45;
pub const MARKER_ARM_THICKNESS: f32 = 0.035;
pub const MARKER_TINT: [f32; 3] = [0.92, 0.94, 0.97];

// Camera
pub const CAMERA_Z: f32 = 10.5;
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CUBE_SIZE: f32 = 3.0;

// Decipher text effect
pub const DECIPHER_TICK_MS: i32 = 40;
pub const DECIPHER_STEP: f32 = 1.0 / 1.5; // characters revealed per tick
pub const DECIPHER_GLYPHS: &str = "ABCDEFGH0123456789!@#$%&*+=-_";

// DOM contract
pub const HERO_SECTION_ID: &str = "home-hero";
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const HERO_LINE_ONE_ID: &str = "hero-line-1";
pub const HERO_LINE_TWO_ID: &str = "hero-line-2";
pub const HERO_CTA_ID: &str = "hero-cta";
pub const HERO_LOADER_ID: &str = "hero-loader";
pub const HERO_LOADER_PERCENT_ID: &str = "hero-loader-percent";

// Video sections and review carousels
pub const VIDEO_PLAYING_CLASS: &str = "is-playing";
pub const VIDEO_MUTED_CLASS: &str = "is-muted";
pub const CAROUSEL_ITEMS_PER_VIEW: usize = 4;

// Third-party booking widget loaded while the contact view is visible
pub const BOOKING_SCRIPT_URL: &str = "https://link.coursecreator360.com/js/form_embed.js";
