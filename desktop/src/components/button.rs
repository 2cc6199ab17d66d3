use std::fmt::Display;

use dioxus::prelude::*;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
}

impl Display for ButtonStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ButtonStyle::Primary => "primary",
                ButtonStyle::Secondary => "secondary",
            }
        )
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    title: String,
    #[props(default)]
    style: ButtonStyle,
    action: Callback<MouseEvent>,
    #[props(default)]
    disabled: bool,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: "btn {props.style}",
            onclick: move |e| {
                props.action.call(e);
            },
            disabled: props.disabled,
            "{props.title}"
        }
    }
}
