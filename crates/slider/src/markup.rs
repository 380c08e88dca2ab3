//! Reading slider configuration and parts out of element markup.

use crate::element_data::ElementDataStore;
use crate::options::{
    DEFAULT_LEFT_GRIP_SELECTOR, DEFAULT_RIGHT_GRIP_SELECTOR, DEFAULT_VALUE_BAR_SELECTOR,
    SliderOptions,
};
use html::{Id, Node, query_descendant};
use slider_core::{Rounding, SliderConfig, SliderError, SliderResult};

pub const KEY_ROUNDING: &str = "rounding";
pub const KEY_RANGE_MIN: &str = "range_min";
pub const KEY_RANGE_MAX: &str = "range_max";
pub const KEY_CUR_MIN: &str = "cur_min";
pub const KEY_CUR_MAX: &str = "cur_max";
pub const KEY_LOWER_LIMIT: &str = "lower-limit";
pub const KEY_UPPER_LIMIT: &str = "upper-limit";

/// Elements a slider drives, resolved once at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GripElements {
    pub left: Option<Id>,
    pub right: Option<Id>,
    pub bar: Option<Id>,
}

impl GripElements {
    /// Which grip `target` is, if any.
    pub fn grip_of(&self, target: Id) -> Option<core_types::Grip> {
        if self.left == Some(target) {
            Some(core_types::Grip::Left)
        } else if self.right == Some(target) {
            Some(core_types::Grip::Right)
        } else {
            None
        }
    }
}

/// Collect whatever configuration `node` carries. Absent or blank values
/// stay `None`; values that are present but unparsable are errors.
pub fn read_config(node: &Node, data: &ElementDataStore) -> SliderResult<SliderConfig> {
    let rounding = match present(data.read(node, KEY_ROUNDING)) {
        Some(text) => Some(Rounding::parse(text)?),
        None => None,
    };
    Ok(SliderConfig {
        rounding,
        range_min: number(node, data, KEY_RANGE_MIN)?,
        range_max: number(node, data, KEY_RANGE_MAX)?,
        cur_min: number(node, data, KEY_CUR_MIN)?,
        cur_max: number(node, data, KEY_CUR_MAX)?,
        lower_limit: number(node, data, KEY_LOWER_LIMIT)?,
        upper_limit: number(node, data, KEY_UPPER_LIMIT)?,
    })
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn number(node: &Node, data: &ElementDataStore, key: &'static str) -> SliderResult<Option<f64>> {
    let Some(text) = present(data.read(node, key)) else {
        return Ok(None);
    };
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(SliderError::InvalidAttribute {
            field: key,
            value: text.to_string(),
        }),
    }
}

/// Resolve grip and bar selectors against the descendants of `node`.
pub fn resolve_elements(node: &Node, options: &SliderOptions) -> SliderResult<GripElements> {
    Ok(GripElements {
        left: resolve(
            node,
            "left_grip_selector",
            options.left_grip_selector.as_deref(),
            DEFAULT_LEFT_GRIP_SELECTOR,
        )?,
        right: resolve(
            node,
            "right_grip_selector",
            options.right_grip_selector.as_deref(),
            DEFAULT_RIGHT_GRIP_SELECTOR,
        )?,
        bar: resolve(
            node,
            "value_bar_selector",
            options.value_bar_selector.as_deref(),
            DEFAULT_VALUE_BAR_SELECTOR,
        )?,
    })
}

fn resolve(
    node: &Node,
    option: &'static str,
    explicit: Option<&str>,
    default: &str,
) -> SliderResult<Option<Id>> {
    match explicit {
        Some(selector) => query_descendant(node, selector)
            .map(Some)
            .ok_or_else(|| SliderError::MissingElement {
                option,
                selector: selector.to_string(),
            }),
        None => Ok(query_descendant(node, default)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html::assign_node_ids;

    fn slider(attrs: Vec<(&str, Option<&str>)>) -> Node {
        let mut n = Node::element(
            "div",
            attrs,
            vec![
                Node::element("div", vec![("class", Some("range-bar"))], Vec::new()),
                Node::element("div", vec![("class", Some("range-grip-left"))], Vec::new()),
                Node::element("div", vec![("class", Some("range-grip-right"))], Vec::new()),
                Node::element("div", vec![("class", Some("handle alt"))], Vec::new()),
            ],
        );
        assign_node_ids(&mut n);
        n
    }

    #[test]
    fn reads_numbers_and_rounding_from_markup() {
        let n = slider(vec![
            ("data-rounding", Some("10")),
            ("data-range_min", Some(" 0 ")),
            ("data-range_max", Some("100")),
            ("data-cur_min", Some("20")),
            ("data-lower-limit", Some("5")),
            ("data-upper-limit", Some("")),
        ]);
        let config = read_config(&n, &ElementDataStore::new()).expect("config");
        assert_eq!(config.rounding, Some(Rounding::Step(10.0)));
        assert_eq!(config.range_min, Some(0.0));
        assert_eq!(config.range_max, Some(100.0));
        assert_eq!(config.cur_min, Some(20.0));
        assert_eq!(config.cur_max, None);
        assert_eq!(config.lower_limit, Some(5.0));
        assert_eq!(config.upper_limit, None);
    }

    #[test]
    fn cached_values_take_precedence() {
        let n = slider(vec![("data-cur_min", Some("20"))]);
        let mut data = ElementDataStore::new();
        data.set(n.id(), KEY_CUR_MIN, "40".to_string());
        let config = read_config(&n, &data).expect("config");
        assert_eq!(config.cur_min, Some(40.0));
    }

    #[test]
    fn unparsable_number_names_the_attribute() {
        let n = slider(vec![("data-range_max", Some("lots"))]);
        assert_eq!(
            read_config(&n, &ElementDataStore::new()),
            Err(SliderError::InvalidAttribute {
                field: KEY_RANGE_MAX,
                value: "lots".to_string(),
            })
        );
    }

    #[test]
    fn default_selectors_are_optional() {
        let n = slider(Vec::new());
        let parts = resolve_elements(&n, &SliderOptions::new()).expect("parts");
        assert!(parts.left.is_some() && parts.right.is_some() && parts.bar.is_some());

        let bare = Node::element("div", Vec::new(), Vec::new());
        let parts = resolve_elements(&bare, &SliderOptions::new()).expect("parts");
        assert_eq!(parts, GripElements::default());
    }

    #[test]
    fn explicit_selector_must_match() {
        let n = slider(Vec::new());
        let opts = SliderOptions::new().left_grip_selector(".alt");
        let parts = resolve_elements(&n, &opts).expect("parts");
        assert_eq!(parts.grip_of(parts.left.expect("left")), Some(core_types::Grip::Left));

        let opts = SliderOptions::new().value_bar_selector(".not-existing-selector");
        assert_eq!(
            resolve_elements(&n, &opts),
            Err(SliderError::MissingElement {
                option: "value_bar_selector",
                selector: ".not-existing-selector".to_string(),
            })
        );
    }
}
