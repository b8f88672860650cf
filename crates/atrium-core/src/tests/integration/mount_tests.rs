//! Full mount round trips with realistic modules: a shared aggregator
//! exporting a transform and a notice view, a feature module with the root
//! route, and a frame module bootstrapping the document.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::kernel::bootstrap::{MountOptions, Shell};
use crate::module_graph::error::ModuleSystemError;
use crate::module_graph::traits::{AppModule, ModuleHostContext};
use crate::module_graph::unit::{UnitDescriptor, UnitInstance};
use crate::module_graph::version::VersionRange;
use crate::module_graph::ModuleImport;
use crate::routing::RouteDescriptor;
use crate::tests::fixtures::RecordingDocumentHost;
use crate::view::error::ViewError;
use crate::view::host::DocumentHost;
use crate::view::node::{Element, Node};
use crate::view::scope::RenderScope;
use crate::view::{ValueTransform, ViewUnit};

struct GreetingTransform;

impl ValueTransform for GreetingTransform {
    fn id(&self) -> &'static str {
        "greeting"
    }

    fn transform(&self, input: &str) -> String {
        match input {
            "en" => "Hello".to_string(),
            "fr" => "Bonjour".to_string(),
            other => format!("Hello ({})", other),
        }
    }
}

/// Renders every active alert as a list item.
struct NoticeBoardView;

impl ViewUnit for NoticeBoardView {
    fn id(&self) -> &'static str {
        "notice-board"
    }

    fn render(&self, scope: &RenderScope<'_>) -> Result<Node, ViewError> {
        let mut list = Element::new("ul").attr("class", "notices");
        for alert in scope.alerts().active() {
            list = list.child(
                Element::new("li")
                    .attr("data-severity", &alert.severity.to_string())
                    .text(&alert.message)
                    .into_node(),
            );
        }
        Ok(list.into_node())
    }
}

struct SharedModule;

#[async_trait]
impl AppModule for SharedModule {
    fn name(&self) -> &'static str {
        "shared"
    }

    fn version(&self) -> &str {
        "0.1.0"
    }

    fn compatible_shell_versions(&self) -> Vec<VersionRange> {
        vec![VersionRange::from_constraint("^0.1").expect("valid constraint")]
    }

    fn imports(&self) -> Vec<ModuleImport> {
        Vec::new()
    }

    fn declarations(&self) -> Vec<UnitDescriptor> {
        vec![
            UnitDescriptor::transform("greeting"),
            UnitDescriptor::view("notice-board"),
        ]
    }

    fn exports(&self) -> Vec<String> {
        vec!["greeting".to_string(), "notice-board".to_string()]
    }

    fn instantiate(&self, unit_id: &str) -> Option<UnitInstance> {
        match unit_id {
            "greeting" => Some(UnitInstance::Transform(Arc::new(GreetingTransform))),
            "notice-board" => Some(UnitInstance::View(Arc::new(NoticeBoardView))),
            _ => None,
        }
    }
}

/// Greets in the configured locale through the imported transform.
struct WelcomeView;

impl ViewUnit for WelcomeView {
    fn id(&self) -> &'static str {
        "welcome"
    }

    fn render(&self, scope: &RenderScope<'_>) -> Result<Node, ViewError> {
        let greeting = scope.apply_transform("greeting", scope.locale())?;
        Ok(Element::new("section")
            .attr("class", "welcome")
            .child(Element::new("p").text(&greeting).into_node())
            .into_node())
    }
}

struct WelcomeModule;

#[async_trait]
impl AppModule for WelcomeModule {
    fn name(&self) -> &'static str {
        "welcome"
    }

    fn version(&self) -> &str {
        "0.1.0"
    }

    fn compatible_shell_versions(&self) -> Vec<VersionRange> {
        vec![VersionRange::from_constraint("^0.1").expect("valid constraint")]
    }

    fn imports(&self) -> Vec<ModuleImport> {
        vec![ModuleImport::any("shared")]
    }

    fn declarations(&self) -> Vec<UnitDescriptor> {
        vec![UnitDescriptor::view("welcome")]
    }

    fn exports(&self) -> Vec<String> {
        // The welcome view stays module-local; only its route reaches it
        Vec::new()
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        vec![RouteDescriptor::new("/", "welcome")]
    }

    fn instantiate(&self, unit_id: &str) -> Option<UnitInstance> {
        match unit_id {
            "welcome" => Some(UnitInstance::View(Arc::new(WelcomeView))),
            _ => None,
        }
    }

    async fn on_mount(&self, context: &ModuleHostContext) -> Result<(), ModuleSystemError> {
        context.alerts.info("welcome", "welcome module ready");
        Ok(())
    }
}

/// Document frame: title, notice board, routed outlet.
struct FrameView;

impl ViewUnit for FrameView {
    fn id(&self) -> &'static str {
        "frame"
    }

    fn render(&self, scope: &RenderScope<'_>) -> Result<Node, ViewError> {
        let outlet = match scope.render_outlet() {
            Ok(node) => node,
            Err(ViewError::NoOutlet) => Element::new("main").attr("class", "empty").into_node(),
            Err(e) => return Err(e),
        };
        Ok(Element::new("div")
            .attr("class", "frame")
            .child(Element::new("h1").text(scope.title()).into_node())
            .child(scope.render_unit("notice-board")?)
            .child(outlet)
            .into_node())
    }
}

struct FrameModule;

#[async_trait]
impl AppModule for FrameModule {
    fn name(&self) -> &'static str {
        "frame"
    }

    fn version(&self) -> &str {
        "0.1.0"
    }

    fn compatible_shell_versions(&self) -> Vec<VersionRange> {
        vec![VersionRange::from_constraint("^0.1").expect("valid constraint")]
    }

    fn imports(&self) -> Vec<ModuleImport> {
        vec![ModuleImport::any("shared"), ModuleImport::any("welcome")]
    }

    fn declarations(&self) -> Vec<UnitDescriptor> {
        vec![UnitDescriptor::view("frame")]
    }

    fn exports(&self) -> Vec<String> {
        Vec::new()
    }

    fn bootstrap_unit(&self) -> Option<String> {
        Some("frame".to_string())
    }

    fn instantiate(&self, unit_id: &str) -> Option<UnitInstance> {
        match unit_id {
            "frame" => Some(UnitInstance::View(Arc::new(FrameView))),
            _ => None,
        }
    }
}

async fn build_shell(config: AppConfig) -> (Shell, Arc<RecordingDocumentHost>) {
    let host = Arc::new(RecordingDocumentHost::new());
    let shell = Shell::with_host(config, Arc::clone(&host) as Arc<dyn DocumentHost>)
        .expect("Shell::with_host failed");
    shell.register_module(Arc::new(SharedModule)).await.expect("register shared");
    shell.register_module(Arc::new(WelcomeModule)).await.expect("register welcome");
    shell.register_module(Arc::new(FrameModule)).await.expect("register frame");
    (shell, host)
}

#[tokio::test]
async fn test_full_mount_round_trip() {
    let mut config = AppConfig::default();
    config.title = "Integration".to_string();
    config.locale = "fr".to_string();
    let (shell, host) = build_shell(config).await;

    let app = shell.mount("frame", MountOptions::default()).await.expect("mount");

    let document = host.last_document().expect("document reached the host");
    assert_eq!(document.title, "Integration");
    // Frame, title, and the routed welcome view in the configured locale
    assert!(document.html.starts_with(r#"<div class="frame">"#), "html: {}", document.html);
    assert!(document.html.contains("<h1>Integration</h1>"));
    assert!(document.html.contains("<p>Bonjour</p>"));
    // The alert posted by the welcome module's on_mount hook is rendered
    assert!(document.html.contains("welcome module ready"));

    app.unmount().await.expect("unmount");
    assert_eq!(host.events().last().map(String::as_str), Some("detach"));
}

#[tokio::test]
async fn test_mount_contributes_exactly_one_route() {
    let (shell, _host) = build_shell(AppConfig::default()).await;
    let app = shell.mount("frame", MountOptions::default()).await.expect("mount");

    let entry = app.resolve_route("/").await.expect("root route resolves");
    assert_eq!(entry.module, "welcome");
    assert_eq!(entry.unit_id, "welcome");

    app.unmount().await.expect("unmount");
}

#[tokio::test]
async fn test_preserve_whitespace_option_changes_serialization() {
    let (shell, host) = build_shell(AppConfig::default()).await;
    let options = MountOptions {
        preserve_whitespace: true,
        initial_path: None,
    };
    let app = shell.mount("frame", options).await.expect("mount");

    let document = host.last_document().expect("document reached the host");
    assert!(
        document.html.contains(">\n<"),
        "siblings should be newline-separated: {}",
        document.html
    );

    app.unmount().await.expect("unmount");
}
