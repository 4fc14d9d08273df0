use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{AxisLabel, AxisType, ItemStyle, LineStyle, SplitLine, Tooltip, Trigger},
    series::{Line, Scatter},
};
use std::rc::Rc;
use yew::prelude::*;

use super::chart::use_chart;
use super::power_chart::{AXIS_COLOR, ZERO_LINE_COLOR};
use crate::models::reading::{PowerSeries, battery_charge_curve, peak_index};

const CHART_ID: &str = "battery-chart";
const PURPLE: &str = "#7E57C2";

#[derive(Properties, PartialEq)]
pub struct BatteryChartProps {
    /// Supplies the time axis; the charge values are synthetic
    pub series: Rc<PowerSeries>,
    pub label: &'static str,
}

/// Placeholder battery charge over the same time axis as the power chart.
#[function_component(BatteryChart)]
pub fn battery_chart(props: &BatteryChartProps) -> Html {
    let container_ref = use_chart(
        CHART_ID,
        (props.series.clone(), props.label),
        build_chart,
    );

    html! {
        <div class="chart-container" style="height: 250px;" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn build_chart((series, label): &(Rc<PowerSeries>, &'static str)) -> CharmingChart {
    let charge = battery_charge_curve(series.len());

    let mut chart = CharmingChart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().bottom("0").left("2%"))
        .grid(
            Grid::new()
                .left("2%")
                .right("2%")
                .top("4%")
                .bottom("20%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.clone())
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("%")
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(SplitLine::new().line_style(LineStyle::new().color(ZERO_LINE_COLOR))),
        )
        .series(
            Line::new()
                .name(*label)
                .data(charge.clone())
                .show_symbol(false)
                .item_style(ItemStyle::new().color(PURPLE))
                .line_style(LineStyle::new().color(PURPLE).width(3.0)),
        );

    // Category axis: x is the label index
    if let Some(peak) = peak_index(&charge) {
        chart = chart.series(
            Scatter::new()
                .symbol_size(10.0)
                .item_style(
                    ItemStyle::new()
                        .color(PURPLE)
                        .border_color("#fff")
                        .border_width(2.0),
                )
                .data(vec![vec![peak as f64, charge[peak]]]),
        );
    }

    chart
}
