/// Builds a `cgmath::Vector3<f32>` without spelling out the full constructor.
#[macro_export]
macro_rules! vector3 {
    ( $x:expr,$y:expr,$z:expr ) => {
        cgmath::Vector3::new($x, $y, $z)
    };
}

/// Builds a `cgmath::Vector2<f32>` without spelling out the full constructor.
#[macro_export]
macro_rules! vector2 {
    ( $x:expr,$y:expr ) => {
        cgmath::Vector2::new($x, $y)
    };
}
