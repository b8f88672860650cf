use atrium_core::view::{Alert, AlertSeverity, Element, Node, RenderScope, ViewError};
use atrium_core::ViewUnit;

fn alert_item(alert: &Alert) -> Node {
    Element::new("div")
        .attr("class", &format!("alert alert-{}", alert.severity))
        .attr("data-alert-id", &alert.id.to_string())
        .text(&alert.message)
        .into_node()
}

/// Renders every active alert, any severity.
pub struct AlertListView;

impl ViewUnit for AlertListView {
    fn id(&self) -> &'static str {
        "alert-list"
    }

    fn render(&self, scope: &RenderScope<'_>) -> Result<Node, ViewError> {
        let mut container = Element::new("div").attr("class", "alerts");
        for alert in scope.alerts().active() {
            container = container.child(alert_item(&alert));
        }
        Ok(container.into_node())
    }
}

/// Renders only error-and-above alerts, marked up for assistive tech.
pub struct ErrorAlertListView;

impl ViewUnit for ErrorAlertListView {
    fn id(&self) -> &'static str {
        "alert-errors"
    }

    fn render(&self, scope: &RenderScope<'_>) -> Result<Node, ViewError> {
        let mut container = Element::new("div")
            .attr("class", "alerts alerts-errors")
            .attr("role", "alert");
        for alert in scope.alerts().active_at_least(AlertSeverity::Error) {
            container = container.child(alert_item(&alert));
        }
        Ok(container.into_node())
    }
}
