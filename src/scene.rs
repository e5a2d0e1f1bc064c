//! Scene model for the contact page globe: geometry, animation state and a
//! perspective projection into flat drawing primitives.

use glam::{Mat4, Vec3, Vec4};
use rand::Rng;
use std::f32::consts::PI;

pub const GLOBE_RADIUS: f32 = 2.5;
pub const RING_COUNT: usize = 3;
pub const RING_BASE_RADIUS: f32 = 3.5;
pub const RING_SPACING: f32 = 0.3;
pub const RING_TUBE: f32 = 0.05;
pub const RING_SEGMENTS: usize = 100;
pub const STAR_SAMPLES: usize = 1000;
pub const STAR_SPREAD: f32 = 200.0;
pub const STAR_EXCLUSION_RADIUS: f32 = 100.0;

pub const GLOBE_SPIN: f32 = 0.001;
pub const STARFIELD_SPIN: f32 = 0.0002;
pub const RING_SPIN_X: f32 = 0.0005;
pub const RING_SPIN_Y: f32 = 0.0008;

const MERIDIANS: usize = 12;
const PARALLELS: usize = 5;
const ARC_SEGMENTS: usize = 48;

#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32, position: Vec3) -> Self {
        let mut camera = Self {
            fov_degrees,
            aspect,
            near,
            far,
            position,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    pub fn set_aspect(&mut self, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.aspect = (width / height) as f32;
        self.update_projection();
    }

    pub fn update_projection(&mut self) {
        self.projection =
            Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * Mat4::from_translation(-self.position)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub radius: f32,
    pub tube: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl Ring {
    fn transform(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation_x) * Mat4::from_rotation_y(self.rotation_y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    pub points: Vec<Vec3>,
    pub rotation_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: f32,
    pub point_intensity: f32,
    pub point_position: Vec3,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            point_intensity: 1.5,
            point_position: Vec3::new(5.0, 5.0, 5.0),
        }
    }
}

impl LightRig {
    /// Lambert brightness of a surface point, clamped to `[0, 1]`.
    pub fn illumination(&self, point: Vec3, normal: Vec3) -> f32 {
        let to_light = (self.point_position - point).normalize_or_zero();
        let diffuse = normal.dot(to_light).max(0.0) * self.point_intensity;
        ((self.ambient + diffuse) / (self.ambient + self.point_intensity)).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeScene {
    pub globe_radius: f32,
    pub globe_rotation_y: f32,
    pub rings: Vec<Ring>,
    pub starfield: Starfield,
    pub lights: LightRig,
    pub camera: PerspectiveCamera,
}

/// Samples a cube around the origin and keeps only points outside the
/// exclusion sphere, leaving a hollow shell.
pub fn generate_starfield<R: Rng + ?Sized>(rng: &mut R, samples: usize) -> Vec<Vec3> {
    let half = STAR_SPREAD / 2.0;
    let limit = STAR_EXCLUSION_RADIUS * STAR_EXCLUSION_RADIUS;
    (0..samples)
        .map(|_| {
            Vec3::new(
                rng.random_range(-half..half),
                rng.random_range(-half..half),
                rng.random_range(-half..half),
            )
        })
        .filter(|point| point.length_squared() > limit)
        .collect()
}

impl GlobeScene {
    pub fn build<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let rings = (0..RING_COUNT)
            .map(|index| Ring {
                radius: RING_BASE_RADIUS + index as f32 * RING_SPACING,
                tube: RING_TUBE,
                rotation_x: rng.random_range(0.0..PI),
                rotation_y: rng.random_range(0.0..PI),
            })
            .collect();
        let starfield = Starfield {
            points: generate_starfield(rng, STAR_SAMPLES),
            rotation_y: 0.0,
        };
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0, Vec3::new(0.0, 0.0, 8.0));
        camera.set_aspect(width, height);
        Self {
            globe_radius: GLOBE_RADIUS,
            globe_rotation_y: 0.0,
            rings,
            starfield,
            lights: LightRig::default(),
            camera,
        }
    }

    /// Advances every rotation by one frame's fixed increment.
    pub fn advance(&mut self) {
        self.globe_rotation_y += GLOBE_SPIN;
        self.starfield.rotation_y += STARFIELD_SPIN;
        for (index, ring) in self.rings.iter_mut().enumerate() {
            let speed = (index + 1) as f32;
            ring.rotation_x += RING_SPIN_X * speed;
            ring.rotation_y += RING_SPIN_Y * speed;
        }
    }

    pub fn project(&self, width: f64, height: f64) -> FrameGeometry {
        let projector = Projector {
            view_projection: self.camera.view_projection(),
            width: width as f32,
            height: height as f32,
        };

        let stars_transform = Mat4::from_rotation_y(self.starfield.rotation_y);
        let stars = self
            .starfield
            .points
            .iter()
            .filter_map(|point| projector.project(stars_transform.transform_point3(*point)))
            .filter(|point| point.inside(projector.width, projector.height))
            .collect();

        let rings = self
            .rings
            .iter()
            .map(|ring| {
                let transform = ring.transform();
                let points = (0..=RING_SEGMENTS)
                    .filter_map(|segment| {
                        let angle = segment as f32 / RING_SEGMENTS as f32 * 2.0 * PI;
                        let local = Vec3::new(ring.radius * angle.cos(), ring.radius * angle.sin(), 0.0);
                        projector.project(transform.transform_point3(local))
                    })
                    .collect();
                Polyline {
                    points,
                    width: (ring.tube * 2.0 * projector.scale_at(self.camera.position.z)).max(1.0),
                    brightness: 1.0,
                }
            })
            .collect();

        FrameGeometry {
            width,
            height,
            globe: self.project_globe(&projector),
            meridians: self.project_grid(&projector),
            rings,
            stars,
        }
    }

    fn project_globe(&self, projector: &Projector) -> GlobeDisc {
        let center = projector.project(Vec3::ZERO).unwrap_or(ScreenPoint {
            x: projector.width / 2.0,
            y: projector.height / 2.0,
            depth: 1.0,
        });
        let radius = projector
            .project(Vec3::new(0.0, self.globe_radius, 0.0))
            .map(|edge| (edge.y - center.y).abs())
            .unwrap_or_default();
        let toward_light = (self.lights.point_position - self.camera.position).normalize_or_zero();
        let surface = self.globe_radius * (self.lights.point_position.normalize_or_zero() + toward_light * 0.25).normalize_or_zero();
        let highlight = projector.project(surface).unwrap_or(center);
        GlobeDisc {
            center,
            radius,
            highlight,
            shade: self.lights.illumination(Vec3::new(0.0, 0.0, self.globe_radius), Vec3::Z),
        }
    }

    /// Latitude/longitude lines on the camera-facing hemisphere.
    fn project_grid(&self, projector: &Projector) -> Vec<Polyline> {
        let spin = Mat4::from_rotation_y(self.globe_rotation_y);
        let radius = self.globe_radius * 1.001;
        let mut lines = Vec::with_capacity(MERIDIANS + PARALLELS);

        for meridian in 0..MERIDIANS {
            let longitude = meridian as f32 / MERIDIANS as f32 * 2.0 * PI;
            let arc = (0..=ARC_SEGMENTS).map(|segment| {
                let latitude = segment as f32 / ARC_SEGMENTS as f32 * PI - PI / 2.0;
                Vec3::new(
                    latitude.cos() * longitude.sin(),
                    latitude.sin(),
                    latitude.cos() * longitude.cos(),
                )
            });
            lines.extend(self.visible_arc(projector, spin, radius, arc));
        }

        for parallel in 1..=PARALLELS {
            let latitude = parallel as f32 / (PARALLELS + 1) as f32 * PI - PI / 2.0;
            let arc = (0..=ARC_SEGMENTS).map(|segment| {
                let longitude = segment as f32 / ARC_SEGMENTS as f32 * 2.0 * PI;
                Vec3::new(
                    latitude.cos() * longitude.sin(),
                    latitude.sin(),
                    latitude.cos() * longitude.cos(),
                )
            });
            lines.extend(self.visible_arc(projector, spin, radius, arc));
        }
        lines
    }

    fn visible_arc(
        &self,
        projector: &Projector,
        spin: Mat4,
        radius: f32,
        normals: impl Iterator<Item = Vec3>,
    ) -> Vec<Polyline> {
        let mut runs = Vec::new();
        let mut current: Vec<ScreenPoint> = Vec::new();
        let mut light_sum = 0.0;
        for normal in normals {
            let normal = spin.transform_vector3(normal);
            let point = normal * radius;
            let facing = normal.dot(self.camera.position - point) > 0.0;
            match projector.project(point).filter(|_| facing) {
                Some(screen) => {
                    light_sum += self.lights.illumination(point, normal);
                    current.push(screen);
                }
                None => {
                    flush_run(&mut runs, &mut current, &mut light_sum);
                }
            }
        }
        flush_run(&mut runs, &mut current, &mut light_sum);
        runs
    }
}

fn flush_run(runs: &mut Vec<Polyline>, current: &mut Vec<ScreenPoint>, light_sum: &mut f32) {
    if current.len() >= 2 {
        let brightness = *light_sum / current.len() as f32;
        runs.push(Polyline {
            points: std::mem::take(current),
            width: 1.0,
            brightness,
        });
    } else {
        current.clear();
    }
    *light_sum = 0.0;
}

struct Projector {
    view_projection: Mat4,
    width: f32,
    height: f32,
}

impl Projector {
    fn project(&self, point: Vec3) -> Option<ScreenPoint> {
        let clip = self.view_projection * Vec4::new(point.x, point.y, point.z, 1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(-1.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * self.width,
            y: (1.0 - ndc.y) * 0.5 * self.height,
            depth: ndc.z,
        })
    }

    /// Pixels per world unit at `distance` in front of the camera.
    fn scale_at(&self, distance: f32) -> f32 {
        let focal = self.view_projection.y_axis.y;
        if distance <= f32::EPSILON {
            return 0.0;
        }
        focal * self.height * 0.5 / distance
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

impl ScreenPoint {
    fn inside(&self, width: f32, height: f32) -> bool {
        (0.0..=width).contains(&self.x) && (0.0..=height).contains(&self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<ScreenPoint>,
    pub width: f32,
    pub brightness: f32,
}

impl Polyline {
    /// Splits the line into runs behind and in front of `pivot` depth. Runs
    /// share their boundary point so the halves join up when drawn.
    pub fn split_at_depth(&self, pivot: f32) -> (Vec<Polyline>, Vec<Polyline>) {
        let mut behind = Vec::new();
        let mut front = Vec::new();
        let mut run: Vec<ScreenPoint> = Vec::new();
        let mut current_side: Option<bool> = None;

        for point in &self.points {
            let side = point.depth > pivot;
            match current_side {
                Some(previous) if previous != side => {
                    run.push(*point);
                    let finished = std::mem::replace(&mut run, vec![*point]);
                    self.push_run(if previous { &mut behind } else { &mut front }, finished);
                }
                _ => run.push(*point),
            }
            current_side = Some(side);
        }
        if let Some(side) = current_side {
            self.push_run(if side { &mut behind } else { &mut front }, run);
        }
        (behind, front)
    }

    fn push_run(&self, into: &mut Vec<Polyline>, points: Vec<ScreenPoint>) {
        if points.len() < 2 {
            return;
        }
        into.push(Polyline {
            points,
            width: self.width,
            brightness: self.brightness,
        });
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeDisc {
    pub center: ScreenPoint,
    pub radius: f32,
    pub highlight: ScreenPoint,
    pub shade: f32,
}

/// One frame of flat drawing primitives, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameGeometry {
    pub width: f64,
    pub height: f64,
    pub stars: Vec<ScreenPoint>,
    pub globe: GlobeDisc,
    pub meridians: Vec<Polyline>,
    pub rings: Vec<Polyline>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn starfield_is_a_hollow_shell() {
        let mut rng = SmallRng::seed_from_u64(11);
        let points = generate_starfield(&mut rng, STAR_SAMPLES);
        assert!(!points.is_empty());
        assert!(points.len() < STAR_SAMPLES);
        assert!(points.iter().all(|point| point.length() > STAR_EXCLUSION_RADIUS));
    }

    #[test]
    fn rings_grow_outward_with_random_tilt() {
        let scene = GlobeScene::build(&mut SmallRng::seed_from_u64(5), 800.0, 600.0);
        assert_eq!(scene.rings.len(), RING_COUNT);
        for (ring, expected) in scene.rings.iter().zip([3.5_f32, 3.8, 4.1]) {
            assert!((ring.radius - expected).abs() < 1e-5);
            assert_eq!(ring.tube, RING_TUBE);
        }
        assert!(scene
            .rings
            .iter()
            .all(|ring| (0.0..PI).contains(&ring.rotation_x) && (0.0..PI).contains(&ring.rotation_y)));
    }

    #[test]
    fn advance_scales_ring_speed_with_index() {
        let mut scene = GlobeScene::build(&mut SmallRng::seed_from_u64(9), 400.0, 400.0);
        let before = scene.clone();
        scene.advance();
        assert!((scene.globe_rotation_y - GLOBE_SPIN).abs() < 1e-7);
        assert!((scene.starfield.rotation_y - STARFIELD_SPIN).abs() < 1e-7);
        for (index, (ring, old)) in scene.rings.iter().zip(&before.rings).enumerate() {
            let speed = (index + 1) as f32;
            assert!((ring.rotation_x - old.rotation_x - RING_SPIN_X * speed).abs() < 1e-6);
            assert!((ring.rotation_y - old.rotation_y - RING_SPIN_Y * speed).abs() < 1e-6);
        }
    }

    #[test]
    fn globe_projects_to_viewport_center() {
        let scene = GlobeScene::build(&mut SmallRng::seed_from_u64(1), 800.0, 600.0);
        let frame = scene.project(800.0, 600.0);
        assert!((frame.globe.center.x - 400.0).abs() < 0.5);
        assert!((frame.globe.center.y - 300.0).abs() < 0.5);
        assert!(frame.globe.radius > 0.0 && frame.globe.radius < 300.0);
        assert_eq!(frame.rings.len(), RING_COUNT);
        assert!(!frame.meridians.is_empty());
    }

    #[test]
    fn aspect_follows_viewport() {
        let mut camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0, Vec3::new(0.0, 0.0, 8.0));
        camera.set_aspect(1200.0, 400.0);
        assert!((camera.aspect - 3.0).abs() < 1e-6);
        camera.set_aspect(0.0, 400.0);
        assert!((camera.aspect - 3.0).abs() < 1e-6);
    }

    #[test]
    fn split_at_depth_keeps_runs_joined() {
        let point = |x: f32, depth: f32| ScreenPoint { x, y: 0.0, depth };
        let line = Polyline {
            points: vec![point(0.0, 0.2), point(1.0, 0.3), point(2.0, 0.9), point(3.0, 0.95), point(4.0, 0.1)],
            width: 2.0,
            brightness: 1.0,
        };
        let (behind, front) = line.split_at_depth(0.5);
        assert_eq!(behind.len(), 1);
        assert_eq!(front.len(), 1);
        assert_eq!(front[0].points.last(), Some(&point(2.0, 0.9)));
        assert_eq!(behind[0].points.first(), Some(&point(2.0, 0.9)));
        assert_eq!(behind[0].points.last(), Some(&point(4.0, 0.1)));
        let total: usize = behind.iter().chain(&front).map(|run| run.points.len()).sum();
        assert_eq!(total, line.points.len() + 1);
    }

    #[test]
    fn lit_side_is_brighter() {
        let lights = LightRig::default();
        let toward = Vec3::new(1.0, 1.0, 1.0).normalize();
        let away = -toward;
        assert!(lights.illumination(toward * 2.5, toward) > lights.illumination(away * 2.5, away));
    }
}
