/// 實體形體組件
use specs::storage::VecStorage;
use specs::Component;

use crate::geom::Point;
use crate::space::{FootprintTemplate, Shaped, SpaceError};

/// 實體佔據的形狀，大多數實體只有一格
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body {
    pub template: FootprintTemplate,
}

impl Component for Body {
    type Storage = VecStorage<Self>;
}

impl Body {
    pub fn single() -> Self {
        Self::default()
    }

    /// 多格形體，點集合必須與原點相連
    pub fn from_shape(shape: &[Point]) -> Result<Self, SpaceError> {
        Ok(Self {
            template: FootprintTemplate::from_shape(shape)?,
        })
    }
}

impl Shaped for Body {
    fn footprint_template(&self) -> &FootprintTemplate {
        &self.template
    }
}
