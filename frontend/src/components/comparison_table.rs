use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::comparison_models::{Column, Row, TableState, SHOW_ALL};

const ROW_HOVER_BACKGROUND: &str = "background-color: rgba(60, 136, 253, 0.05);";

#[derive(Clone, PartialEq)]
pub struct FeatureButton {
    pub feature: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct ComparisonTableProps {
    pub id: AttrValue,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    /// Categories that get a filter select above the table.
    #[prop_or_default]
    pub filters: Vec<AttrValue>,
    #[prop_or_default]
    pub feature_buttons: Vec<FeatureButton>,
}

#[function_component(ComparisonTable)]
pub fn comparison_table(props: &ComparisonTableProps) -> Html {
    let table = {
        let columns = props.columns.clone();
        let rows = props.rows.clone();
        use_state(move || TableState::new(columns, rows))
    };
    let hovered = use_state(|| None::<usize>);

    let filters = props.filters.iter().map(|category| {
        let onchange = {
            let table = table.clone();
            let category = category.clone();
            Callback::from(move |e: Event| {
                let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                    return;
                };
                let mut next = (*table).clone();
                next.set_filter(&category, &select.value());
                table.set(next);
            })
        };
        html! {
            <select data-filter={category.clone()} data-table={props.id.clone()} {onchange}>
                <option value={SHOW_ALL}>{format!("All ({})", category)}</option>
                {
                    table.category_values(category).into_iter().map(|value| html! {
                        <option value={value.clone()}>{value}</option>
                    }).collect::<Html>()
                }
            </select>
        }
    }).collect::<Html>();

    let buttons = props.feature_buttons.iter().map(|button| {
        let onclick = {
            let table = table.clone();
            let feature = button.feature.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*table).clone();
                next.highlight(&feature);
                table.set(next);
            })
        };
        let active = table.highlighted() == Some(&*button.feature);
        html! {
            <button
                class={classes!("comparison-highlight-btn", active.then(|| "active"))}
                data-feature={button.feature.clone()}
                data-table={props.id.clone()}
                {onclick}
            >
                {button.label.clone()}
            </button>
        }
    }).collect::<Html>();

    let headers = table.columns().iter().enumerate().map(|(index, column)| {
        match &column.sort_key {
            Some(key) => {
                let onclick = {
                    let table = table.clone();
                    let key = key.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*table).clone();
                        if let Some(direction) = next.sort_by(&key) {
                            log::debug!("Sorted comparison table by {} ({:?})", key, direction);
                        }
                        table.set(next);
                    })
                };
                html! {
                    <th data-sort={key.clone()} class={classes!(table.indicator(index))} {onclick}>
                        {column.label.clone()}
                    </th>
                }
            }
            None => html! { <th>{column.label.clone()}</th> },
        }
    }).collect::<Html>();

    let rows = table.ordered_rows().map(|(index, row)| {
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        let style = (*hovered == Some(index)).then(|| ROW_HOVER_BACKGROUND);
        let hidden = !table.is_visible(row);
        html! {
            <tr
                key={index}
                class={classes!(table.is_highlighted(row).then(|| "highlighted"))}
                data-feature={row.feature.clone()}
                style={if hidden { Some("display: none;") } else { style }}
                {onmouseenter}
                {onmouseleave}
            >
                {
                    table.columns().iter().zip(row.cells.iter()).map(|(column, cell)| html! {
                        <td data-category={column.category.clone()}>{cell.clone()}</td>
                    }).collect::<Html>()
                }
            </tr>
        }
    }).collect::<Html>();

    html! {
        <div class="comparison-table-wrapper">
            if !props.filters.is_empty() {
                <div class="comparison-filter">{filters}</div>
            }
            if !props.feature_buttons.is_empty() {
                <div class="comparison-feature-buttons">{buttons}</div>
            }
            <div class="comparison-table">
                <table id={props.id.clone()}>
                    <thead><tr>{headers}</tr></thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}
