use crate::P2;

pub(crate) fn is_finite(point: &P2) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
