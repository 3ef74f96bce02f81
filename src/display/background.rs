//! Parallax clouds behind the playfield.  Purely visual: the simulation
//! never sees these.

use rand::Rng;

use seagull_son::entities::Playfield;

/// (speed px/frame, base height as a fraction of the field, cloud size)
const LAYERS: [(f32, f32, f32); 2] = [(0.2, 0.5, 5.0), (0.5, 0.5, 10.0)];
const CLOUDS_PER_LAYER: usize = 10;
/// The near layer sits a little higher than the far one
const NEAR_LIFT: f32 = 50.0;

#[derive(Clone, Debug)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

#[derive(Clone, Debug)]
pub struct Layer {
    pub speed: f32,
    pub clouds: Vec<Cloud>,
    /// Far layers are drawn dimmer
    pub far: bool,
}

#[derive(Clone, Debug)]
pub struct Sky {
    pub layers: Vec<Layer>,
}

impl Sky {
    pub fn new<R: Rng>(rng: &mut R, field: &Playfield) -> Self {
        let layers = LAYERS
            .iter()
            .enumerate()
            .map(|(i, &(speed, base, size))| {
                let base_y = field.height * base - i as f32 * NEAR_LIFT;
                let clouds = (0..CLOUDS_PER_LAYER)
                    .map(|_| Cloud {
                        x: rng.gen_range(0.0..field.width * 2.0),
                        y: base_y + rng.gen_range(-40.0..=40.0),
                        size: rng.gen_range(size * 0.8..=size * 1.2),
                    })
                    .collect();
                Layer {
                    speed,
                    clouds,
                    far: i == 0,
                }
            })
            .collect();
        Sky { layers }
    }

    /// Drift every cloud left; clouds leaving the screen re-enter on the right.
    pub fn advance<R: Rng>(&mut self, rng: &mut R, field: &Playfield) {
        for layer in &mut self.layers {
            for cloud in &mut layer.clouds {
                cloud.x -= layer.speed;
                if cloud.x < -cloud.size {
                    cloud.x = field.width + rng.gen_range(0.0..=cloud.size);
                }
            }
        }
    }
}
