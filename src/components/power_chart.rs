use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{AxisLabel, AxisType, ItemStyle, LineStyle, SplitLine, Tooltip, Trigger},
    series::Line,
};
use std::rc::Rc;
use yew::prelude::*;

use super::chart::use_chart;
use crate::models::reading::PowerSeries;

const CHART_ID: &str = "power-chart";
pub const GREEN: &str = "#63B686";
pub const AXIS_COLOR: &str = "#6b7280";
pub const ZERO_LINE_COLOR: &str = "#C9D5DC";

#[derive(Properties, PartialEq)]
pub struct PowerChartProps {
    pub series: Rc<PowerSeries>,
    /// Legend label in the current language
    pub label: &'static str,
}

/// Power over the selected time window.
#[function_component(PowerChart)]
pub fn power_chart(props: &PowerChartProps) -> Html {
    let container_ref = use_chart(
        CHART_ID,
        (props.series.clone(), props.label),
        build_chart,
    );

    html! {
        <div class="chart-container" style="height: 320px;" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn build_chart((series, label): &(Rc<PowerSeries>, &'static str)) -> CharmingChart {
    CharmingChart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().bottom("0").left("2%"))
        .grid(
            Grid::new()
                .left("2%")
                .right("2%")
                .top("4%")
                .bottom("18%")
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
                .name("W")
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(SplitLine::new().line_style(LineStyle::new().color(ZERO_LINE_COLOR))),
        )
        .series(
            Line::new()
                .name(*label)
                .data(series.power.clone())
                .show_symbol(false)
                .item_style(ItemStyle::new().color(GREEN))
                .line_style(LineStyle::new().color(GREEN).width(2.0)),
        )
}
