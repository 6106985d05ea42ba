// Fri Oct 16 2026 - Alex

use crate::config::InspectorConfig;
use crate::output::{LayoutRenderer, ReportError};
use crate::probe::{AddressProbe, RoutineCache};
use crate::reflect::{Reflect, TypeRef};
use crate::structure::{LayoutCache, LayoutComputer, LayoutError, TypeLayout};
use std::io::Write;
use std::sync::Arc;

/// Entry point tying probing, layout computation and rendering together.
pub struct Inspector {
    config: InspectorConfig,
    computer: LayoutComputer,
    renderer: LayoutRenderer,
}

impl Inspector {
    pub fn new() -> Self {
        Self::with_config(InspectorConfig::default())
    }

    pub fn with_config(config: InspectorConfig) -> Self {
        Self::with_routines(config, Arc::new(RoutineCache::new()))
    }

    /// Builds an inspector that shares compiled probe routines with others.
    pub fn with_routines(config: InspectorConfig, routines: Arc<RoutineCache>) -> Self {
        let mut computer = LayoutComputer::with_probe(AddressProbe::with_cache(routines));
        if config.cache_layouts {
            computer = computer.with_cache(Arc::new(LayoutCache::new()));
        }
        let renderer = LayoutRenderer::from_config(&config);

        Self {
            config,
            computer,
            renderer,
        }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub fn computer(&self) -> &LayoutComputer {
        &self.computer
    }

    pub fn compute_layout<T: Reflect>(&self) -> Result<Arc<TypeLayout>, LayoutError> {
        self.compute_layout_of(&TypeRef::of::<T>())
    }

    pub fn compute_layout_of(&self, ty: &TypeRef) -> Result<Arc<TypeLayout>, LayoutError> {
        self.computer.compute_layout(ty)
    }

    pub fn render<T: Reflect>(&self, recursive: bool) -> Result<String, LayoutError> {
        self.render_of(&TypeRef::of::<T>(), recursive)
    }

    pub fn render_of(&self, ty: &TypeRef, recursive: bool) -> Result<String, LayoutError> {
        let layout = self.compute_layout_of(ty)?;
        Ok(self.renderer.render(&layout, recursive))
    }

    pub fn print<T: Reflect, W: Write>(&self, sink: &mut W, recursive: bool) -> Result<(), ReportError> {
        self.print_of(&TypeRef::of::<T>(), sink, recursive)
    }

    /// Writes the report for `ty`. Nothing reaches the sink unless the whole
    /// layout was computed.
    pub fn print_of<W: Write>(&self, ty: &TypeRef, sink: &mut W, recursive: bool) -> Result<(), ReportError> {
        let diagram = self.render_of(ty, recursive)?;
        writeln!(sink, "Type layout for '{}'", ty.short_name())?;
        writeln!(sink, "{}", diagram)?;
        Ok(())
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

pub fn compute_layout<T: Reflect>() -> Result<Arc<TypeLayout>, LayoutError> {
    Inspector::new().compute_layout::<T>()
}

/// Prints the layout report of `T` to standard output.
pub fn print<T: Reflect>(recursive: bool) -> Result<(), ReportError> {
    let stdout = std::io::stdout();
    let mut sink = stdout.lock();
    Inspector::new().print::<T, _>(&mut sink, recursive)
}
