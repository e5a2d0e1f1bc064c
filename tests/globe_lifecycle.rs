use portfolio_app::globe::{SceneController, SceneError, SceneHost};
use portfolio_app::scene::{FrameGeometry, RING_COUNT, STAR_EXCLUSION_RADIUS};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared record of what every fake host has done, surviving the hosts
/// themselves.
#[derive(Default)]
struct HostLog {
    attached: Cell<usize>,
    detached: Cell<usize>,
    frames: Cell<usize>,
    resizes: RefCell<Vec<(f64, f64)>>,
    next_id: Cell<u32>,
}

impl HostLog {
    fn live_surfaces(&self) -> usize {
        self.attached.get() - self.detached.get()
    }
}

struct FakeHost {
    log: Rc<HostLog>,
    size: Rc<Cell<(f64, f64)>>,
}

impl FakeHost {
    fn new(log: &Rc<HostLog>, width: f64, height: f64) -> Self {
        Self {
            log: log.clone(),
            size: Rc::new(Cell::new((width, height))),
        }
    }
}

impl SceneHost for FakeHost {
    type Surface = u32;

    fn container_size(&self) -> (f64, f64) {
        self.size.get()
    }

    fn attach_surface(&mut self, _width: f64, _height: f64) -> Result<u32, SceneError> {
        let id = self.log.next_id.get();
        self.log.next_id.set(id + 1);
        self.log.attached.set(self.log.attached.get() + 1);
        Ok(id)
    }

    fn resize_surface(&mut self, _surface: &u32, width: f64, height: f64) {
        self.log.resizes.borrow_mut().push((width, height));
    }

    fn present(&mut self, _surface: &u32, frame: &FrameGeometry) {
        assert_eq!(frame.rings.len(), RING_COUNT);
        self.log.frames.set(self.log.frames.get() + 1);
    }

    fn detach_surface(&mut self, _surface: u32) {
        self.log.detached.set(self.log.detached.get() + 1);
    }
}

#[test]
fn remounting_leaves_exactly_one_surface() {
    let log = Rc::new(HostLog::default());
    let mut rng = SmallRng::seed_from_u64(11);

    let mut current = Some(SceneController::mount(Some(FakeHost::new(&log, 800.0, 600.0)), &mut rng).unwrap());
    assert_eq!(log.live_surfaces(), 1);

    current.take();
    current = Some(SceneController::mount(Some(FakeHost::new(&log, 800.0, 600.0)), &mut rng).unwrap());
    assert_eq!(log.live_surfaces(), 1);
    assert_eq!(log.attached.get(), 2);

    drop(current);
    assert_eq!(log.live_surfaces(), 0);
}

#[test]
fn missing_container_attaches_nothing() {
    let mut rng = SmallRng::seed_from_u64(1);
    let result = SceneController::<FakeHost>::mount(None, &mut rng);
    assert!(matches!(result, Err(SceneError::ContainerUnavailable)));
}

#[test]
fn teardown_stops_the_loop_and_is_idempotent() {
    let log = Rc::new(HostLog::default());
    let mut rng = SmallRng::seed_from_u64(5);
    let mut controller = SceneController::mount(Some(FakeHost::new(&log, 640.0, 480.0)), &mut rng).unwrap();
    let flag = controller.loop_flag();

    assert!(controller.tick());
    assert!(controller.tick());
    assert_eq!(log.frames.get(), 2);

    controller.teardown();
    controller.teardown();
    assert!(!flag.is_running());
    assert!(!controller.is_attached());
    assert!(!controller.tick());
    assert_eq!(log.frames.get(), 2);

    drop(controller);
    assert_eq!(log.detached.get(), 1);
}

#[test]
fn ticking_advances_rotations() {
    let log = Rc::new(HostLog::default());
    let mut rng = SmallRng::seed_from_u64(9);
    let mut controller = SceneController::mount(Some(FakeHost::new(&log, 400.0, 400.0)), &mut rng).unwrap();
    let before = controller.scene().clone();

    controller.tick();

    let after = controller.scene();
    assert!(after.globe_rotation_y > before.globe_rotation_y);
    assert!(after.starfield.rotation_y > before.starfield.rotation_y);
    for (old, new) in before.rings.iter().zip(&after.rings) {
        assert!(new.rotation_x > old.rotation_x);
        assert!(new.rotation_y > old.rotation_y);
    }
}

#[test]
fn resize_follows_container() {
    let log = Rc::new(HostLog::default());
    let host = FakeHost::new(&log, 800.0, 600.0);
    let size = host.size.clone();
    let mut rng = SmallRng::seed_from_u64(2);
    let mut controller = SceneController::mount(Some(host), &mut rng).unwrap();

    controller.resize();
    assert!(log.resizes.borrow().is_empty());

    size.set((400.0, 800.0));
    controller.resize();
    assert_eq!(*log.resizes.borrow(), vec![(400.0, 800.0)]);
    assert!((controller.scene().camera.aspect - 0.5).abs() < 1e-6);
}

#[test]
fn starfield_is_a_hollow_shell() {
    let log = Rc::new(HostLog::default());
    let mut rng = SmallRng::seed_from_u64(3);
    let controller = SceneController::mount(Some(FakeHost::new(&log, 800.0, 600.0)), &mut rng).unwrap();
    let points = &controller.scene().starfield.points;
    assert!(!points.is_empty());
    assert!(points.iter().all(|point| point.length() > STAR_EXCLUSION_RADIUS));
}

#[test]
fn dropping_the_controller_cancels_every_loop_flag() {
    let log = Rc::new(HostLog::default());
    let mut rng = SmallRng::seed_from_u64(4);
    let controller = SceneController::mount(Some(FakeHost::new(&log, 320.0, 240.0)), &mut rng).unwrap();
    let first = controller.loop_flag();
    let second = first.clone();
    assert!(first.is_running() && second.is_running());

    drop(controller);

    assert!(!first.is_running());
    assert!(!second.is_running());
    assert_eq!(log.live_surfaces(), 0);
}
