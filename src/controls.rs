/*!
Keyboard bindings that drive the transformation state of the demos.

| Keys              | Effect                                      |
|-------------------|---------------------------------------------|
| `Q` / `W`         | x rotation speed down / up                  |
| `E` / `R`         | y rotation speed down / up                  |
| `T` / `Y`         | z rotation speed down / up                  |
| `A` / `S`         | scale down / up                             |
| `Left` / `Right`  | move along x                                |
| `Down` / `Up`     | move along y                                |
| `Z` / `X`         | move along z                                |
| `J` / `L`         | camera eye along x                          |
| `U` / `O`         | camera eye along y                          |
| `K` / `I`         | camera eye along z                          |
| `1` to `6`        | light position along x, y and z             |
| `M`               | next draw mode                              |
| `C`               | toggle the color mode                       |
| `Space`           | back to the start-up state                  |

*/
use winit::event::VirtualKeyCode;

use crate::objects::{ColorMode, DrawMode};
use crate::transform::Model;

/// Change of a rotation speed per key press, in degrees per frame.
pub const ANGLE_STEP: f32 = 0.05;
/// Change of the scale per key press.
pub const SCALE_STEP: f32 = 0.02;
/// Smallest scale reachable from the keyboard.
pub const MIN_SCALE: f32 = 0.05;
/// Change of the translation per key press.
pub const TRANSLATION_STEP: f32 = 0.05;
/// Change of the camera eye per key press.
pub const EYE_STEP: f32 = 0.1;
/// Change of the light position per key press.
pub const LIGHT_STEP: f32 = 0.1;

/// Camera eye position at start-up.
pub const DEFAULT_EYE: [f32; 3] = [0.0, 0.0, 4.0];
/// Light position at start-up.
pub const DEFAULT_LIGHT: [f32; 3] = [2.0, 2.0, 2.0];

/// Transformation state of a demo.
#[derive(Clone, Debug, PartialEq)]
pub struct Controls {
    /// Current rotation around x, y and z, in degrees within `[0, 360)`.
    pub angle: [f32; 3],
    /// Rotation added to `angle` every frame.
    pub angle_inc: [f32; 3],
    /// Uniform scale of the model.
    pub scale: f32,
    /// Translation of the model.
    pub translation: [f32; 3],
    /// Camera position. The camera always looks at the origin.
    pub eye: [f32; 3],
    /// Light position in world space.
    pub light: [f32; 3],
    /// How objects are rasterized.
    pub draw_mode: DrawMode,
    /// How the cube is colored.
    pub color_mode: ColorMode,
    start: Option<Box<Controls>>,
}

impl Controls {
    /// The start-up state: no rotation, unit scale, camera on the z axis.
    pub fn new() -> Controls {
        Controls {
            angle: [0.0; 3],
            angle_inc: [0.0; 3],
            scale: 1.0,
            translation: [0.0; 3],
            eye: DEFAULT_EYE,
            light: DEFAULT_LIGHT,
            draw_mode: DrawMode::default(),
            color_mode: ColorMode::default(),
            start: None,
        }
    }

    /// Same as `new` with rotation speeds already set. `Space` resets to these speeds.
    pub fn spinning(angle_inc: [f32; 3]) -> Controls {
        Controls { angle_inc, .. Controls::new() }.with_reset()
    }

    /// Records the current state as the one `Space` goes back to.
    ///
    /// Call it once the demo has customized its start-up state:
    ///
    /// ```
    /// # use glw::{ColorMode, Controls};
    /// let mut controls = Controls::spinning([0.0, 0.3, 0.0]);
    /// controls.color_mode = ColorMode::Solid;
    /// let controls = controls.with_reset();
    /// ```
    pub fn with_reset(mut self) -> Controls {
        self.start = None;
        self.start = Some(Box::new(self.clone()));
        self
    }

    /// Goes back to the state recorded by `with_reset`, or to `new` if there is none.
    pub fn reset(&mut self) {
        *self = match self.start.take() {
            Some(start) => {
                let mut controls = (*start).clone();
                controls.start = Some(start);
                controls
            },
            None => Controls::new(),
        };
    }

    /// Moves the animation one frame forward.
    pub fn advance(&mut self) {
        for (angle, inc) in self.angle.iter_mut().zip(self.angle_inc.iter()) {
            *angle = (*angle + inc).rem_euclid(360.0);
        }
    }

    /// Applies the binding of `key`. Returns `false` if the key isn't bound.
    pub fn handle_key(&mut self, key: VirtualKeyCode) -> bool {
        use winit::event::VirtualKeyCode::*;

        match key {
            Q => self.angle_inc[0] -= ANGLE_STEP,
            W => self.angle_inc[0] += ANGLE_STEP,
            E => self.angle_inc[1] -= ANGLE_STEP,
            R => self.angle_inc[1] += ANGLE_STEP,
            T => self.angle_inc[2] -= ANGLE_STEP,
            Y => self.angle_inc[2] += ANGLE_STEP,

            A => self.scale = (self.scale - SCALE_STEP).max(MIN_SCALE),
            S => self.scale += SCALE_STEP,

            Left => self.translation[0] -= TRANSLATION_STEP,
            Right => self.translation[0] += TRANSLATION_STEP,
            Down => self.translation[1] -= TRANSLATION_STEP,
            Up => self.translation[1] += TRANSLATION_STEP,
            Z => self.translation[2] -= TRANSLATION_STEP,
            X => self.translation[2] += TRANSLATION_STEP,

            J => self.eye[0] -= EYE_STEP,
            L => self.eye[0] += EYE_STEP,
            U => self.eye[1] -= EYE_STEP,
            O => self.eye[1] += EYE_STEP,
            I => self.eye[2] -= EYE_STEP,
            K => self.eye[2] += EYE_STEP,

            Key1 => self.light[0] -= LIGHT_STEP,
            Key2 => self.light[0] += LIGHT_STEP,
            Key3 => self.light[1] -= LIGHT_STEP,
            Key4 => self.light[1] += LIGHT_STEP,
            Key5 => self.light[2] -= LIGHT_STEP,
            Key6 => self.light[2] += LIGHT_STEP,

            M => {
                self.draw_mode = self.draw_mode.next();
                log::info!("{}", self.draw_mode);
            },
            C => {
                self.color_mode = self.color_mode.toggle();
                log::info!("{}", self.color_mode);
            },

            Space => self.reset(),

            _ => return false,
        }

        true
    }

    /// Builds the model matrix: translation, then scale, then the x, y and z rotations.
    pub fn model(&self) -> Model {
        let [tx, ty, tz] = self.translation;
        let mut model = Model::identity();

        model.translate(tx, ty, tz)
             .scale(self.scale, self.scale, self.scale)
             .rotate(self.angle[0], [1.0, 0.0, 0.0])
             .rotate(self.angle[1], [0.0, 1.0, 0.0])
             .rotate(self.angle[2], [0.0, 0.0, 1.0]);

        model
    }
}

impl Default for Controls {
    fn default() -> Controls {
        Controls::new()
    }
}
