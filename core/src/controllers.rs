use crate::constants::*;
use crate::types::PadButton;

/// Device names the game knows how to shoot with. Matching is exact.
pub const KNOWN_CONTROLLERS: [(&str, PadButton); 4] = [
    (XBOX_LEGACY, SOUTH_FIRE),
    (XBOX, SOUTH_FIRE),
    (PS3, SOUTH_FIRE),
    (NINTENDO, EAST_FIRE),
];

/// Fire button for a device name, or `None` for an unrecognized controller.
pub fn resolve_fire_button(name: &str) -> Option<PadButton> {
    KNOWN_CONTROLLERS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, button)| button)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xbox_and_ps3_fire_with_south() {
        assert_eq!(resolve_fire_button("Xbox Controller"), Some(PadButton::RightFaceDown));
        assert_eq!(resolve_fire_button("Xbox 360 Controller"), Some(PadButton::RightFaceDown));
        assert_eq!(
            resolve_fire_button("Sony PLAYSTATION(R)3 Controller"),
            Some(PadButton::RightFaceDown)
        );
    }

    #[test]
    fn nintendo_fires_with_east() {
        assert_eq!(
            resolve_fire_button("Nintendo Co., Ltd. Pro Controller"),
            Some(PadButton::RightFaceRight)
        );
    }

    #[test]
    fn match_is_exact() {
        assert_eq!(resolve_fire_button(""), None);
        assert_eq!(resolve_fire_button("xbox 360 controller"), None);
        assert_eq!(resolve_fire_button("Xbox 360 Controller "), None);
        assert_eq!(resolve_fire_button("Xbox"), None);
        assert_eq!(resolve_fire_button("Generic USB Joystick"), None);
    }
}
