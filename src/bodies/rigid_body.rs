use crate::bodies::{BodyInfo, Color, Contact, ForceType};
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::shapes::Shape;
use crate::Result;

/// A rigid body for the platformer simulation
#[derive(Debug)]
pub struct RigidBody {
    /// The body's collision shape, exclusively owned
    shape: Shape,

    /// The body's mass; `f64::INFINITY` makes the body immovable
    mass: f64,

    /// The color used when drawing the body
    color: Color,

    /// The body's linear velocity
    velocity: Vector2,

    /// Acceleration applied during the last tick
    acceleration: Vector2,

    /// Accumulated rotation in radians
    orientation: f64,

    /// Constant angular velocity in radians per second
    angular_velocity: f64,

    /// Forces and impulses to be consumed by the next tick
    forces: Vec<ForceType>,

    /// Set once gameplay logic wants the body gone
    removed: bool,

    /// Game-specific payload
    info: Option<Box<dyn BodyInfo>>,
}

impl RigidBody {
    /// Creates a new body owning `shape`.
    ///
    /// Mass must be strictly positive; `f64::INFINITY` is accepted for immovable bodies.
    pub fn new(shape: Shape, mass: f64, color: Color) -> Result<Self> {
        if !(mass > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "body mass must be positive or infinite, got {}",
                mass
            )));
        }

        Ok(Self {
            shape,
            mass,
            color,
            velocity: Vector2::ZERO,
            acceleration: Vector2::ZERO,
            orientation: 0.0,
            angular_velocity: 0.0,
            forces: Vec::new(),
            removed: false,
            info: None,
        })
    }

    /// Creates a new body carrying a game-specific payload
    pub fn with_info<I: BodyInfo>(shape: Shape, mass: f64, color: Color, info: I) -> Result<Self> {
        let mut body = Self::new(shape, mass, color)?;
        body.info = Some(Box::new(info));
        Ok(body)
    }

    /// Borrows the body's live shape
    pub fn get_shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns an independent copy of the body's shape
    pub fn shape_snapshot(&self) -> Shape {
        self.shape.clone()
    }

    /// Replaces the body's shape, dropping the previous one
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn get_centroid(&self) -> Vector2 {
        self.shape.get_centroid()
    }

    /// Translates the body so its centroid lands on `position`
    pub fn set_centroid(&mut self, position: Vector2) {
        let delta = position - self.shape.get_centroid();
        self.shape.translate(delta);
    }

    /// Moves the body by `delta`
    pub fn translate(&mut self, delta: Vector2) {
        self.shape.translate(delta);
    }

    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    /// Returns true if the body has infinite mass
    pub fn is_immovable(&self) -> bool {
        self.mass.is_infinite()
    }

    pub fn get_color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Acceleration applied during the most recent tick
    pub fn get_acceleration(&self) -> Vector2 {
        self.acceleration
    }

    pub fn get_orientation(&self) -> f64 {
        self.orientation
    }

    /// Rotates the body about its centroid to the absolute orientation `angle`
    pub fn set_rotation(&mut self, angle: f64) {
        let centroid = self.shape.get_centroid();
        self.shape.rotate(angle - self.orientation, centroid);
        self.orientation = angle;
    }

    pub fn get_angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, theta: f64) {
        self.angular_velocity = theta;
    }

    /// Queues a force to be applied over the next tick
    pub fn add_force(&mut self, force: Vector2) {
        self.forces.push(ForceType::Force(force));
    }

    /// Queues an impulse to be applied on the next tick
    pub fn add_impulse(&mut self, impulse: Vector2) {
        self.forces.push(ForceType::Impulse(impulse));
    }

    /// Sum of the forces queued since the last tick
    pub fn get_force(&self) -> Vector2 {
        self.forces.iter().fold(Vector2::ZERO, |sum, f| match f {
            ForceType::Force(force) => sum + *force,
            ForceType::Impulse(_) => sum,
        })
    }

    /// Sum of the impulses queued since the last tick
    pub fn get_impulse(&self) -> Vector2 {
        self.forces.iter().fold(Vector2::ZERO, |sum, f| match f {
            ForceType::Force(_) => sum,
            ForceType::Impulse(impulse) => sum + *impulse,
        })
    }

    /// Marks the body for removal on the next scene tick
    pub fn remove(&mut self) {
        self.removed = true;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Returns true if the body carries a payload
    pub fn has_info(&self) -> bool {
        self.info.is_some()
    }

    /// Borrows the payload as a concrete type
    pub fn get_info<T: BodyInfo>(&self) -> Option<&T> {
        self.info.as_deref()?.as_any().downcast_ref::<T>()
    }

    /// Mutably borrows the payload as a concrete type
    pub fn get_info_mut<T: BodyInfo>(&mut self) -> Option<&mut T> {
        self.info.as_deref_mut()?.as_any_mut().downcast_mut::<T>()
    }

    /// Replaces the payload, returning the previous one
    pub fn set_info(&mut self, info: Option<Box<dyn BodyInfo>>) -> Option<Box<dyn BodyInfo>> {
        std::mem::replace(&mut self.info, info)
    }

    /// Contact sides reported by the payload, empty without one
    pub fn get_contact(&self) -> Contact {
        self.info.as_ref().map(|info| info.contact()).unwrap_or_default()
    }

    /// Advances the body by `dt` seconds.
    ///
    /// Consumes every queued force and impulse, zeroes velocity components
    /// blocked by contacts, clamps the result to `velocity_limit` and moves the
    /// shape by the average of the old and new velocity.
    pub fn tick(&mut self, dt: f64, velocity_limit: Vector2) {
        if let Some(info) = self.info.as_mut() {
            info.tick(dt);
        }

        let force = self.get_force();
        let impulse = self.get_impulse();
        self.forces.clear();

        let contact = self.get_contact();
        self.acceleration = apply_normal_force(contact, force / self.mass);
        let impulse_dv = impulse / self.mass;

        let v0 = apply_normal_force(contact, self.velocity);
        self.velocity = limit_velocity(v0 + self.acceleration * dt + impulse_dv, velocity_limit);

        self.shape.translate((v0 + self.velocity) * (0.5 * dt));

        if self.angular_velocity != 0.0 {
            let angle = self.angular_velocity * dt;
            let centroid = self.shape.get_centroid();
            self.shape.rotate(angle, centroid);
            self.orientation += angle;
        }
    }
}

/// Zeroes the components of `v` pushing into a contact.
///
/// Wall contact blocks horizontal motion; standing blocks vertical motion, and
/// a ceiling blocks only upward motion.
pub fn apply_normal_force(contact: Contact, mut v: Vector2) -> Vector2 {
    if contact.intersects(Contact::LEFT | Contact::RIGHT) {
        v.x = 0.0;
    }
    if contact.contains(Contact::BELOW) || (contact.contains(Contact::ABOVE) && v.y > 0.0) {
        v.y = 0.0;
    }
    v
}

/// Clamps each component of `v` into `[-limit, limit]`
pub fn limit_velocity(v: Vector2, limit: Vector2) -> Vector2 {
    Vector2::new(v.x.clamp(-limit.x, limit.x), v.y.clamp(-limit.y, limit.y))
}
