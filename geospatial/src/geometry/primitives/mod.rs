mod circle;
mod point;
mod polygon;
mod polyline;
mod shape;
mod vector;

#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use polygon::Polygon;
#[doc(inline)]
pub use polyline::Polyline;
#[doc(inline)]
pub use shape::Shape;
#[doc(inline)]
pub use vector::Vector2;
