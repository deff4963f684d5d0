use std::path::PathBuf;

use anyhow::Context;
use schemars::{
    gen::{SchemaGenerator, SchemaSettings},
    schema::RootSchema,
    JsonSchema,
};

use super::Cmd;

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Directory to write `<TypeName>.json` files into. Prints to stdout if omitted
    #[clap(short = 'o', long = "outdir")]
    pub outdir: Option<PathBuf>,
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        if let Some(dir) = &self.outdir {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create output directory {:?}", dir))?;
        }
        for item in get_schema_items() {
            log::info!("Generating schema for: {}", item.type_name());
            let schema = serde_json::to_string_pretty(&item.gen())?;
            match &self.outdir {
                Some(dir) => {
                    let path = dir.join(format!("{}.json", item.name()));
                    std::fs::write(&path, schema).with_context(|| format!("write {:?}", path))?;
                }
                None => println!("{schema}"),
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ISchemaItem
// -----------------------------------------------------------------------------
trait ISchemaItem {
    fn name(&self) -> String;
    fn type_name(&self) -> &'static str;
    fn gen(&self) -> RootSchema;
}

struct SchemaItem<T>(std::marker::PhantomData<T>);

impl<T> Default for SchemaItem<T> {
    fn default() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: 'static + JsonSchema> SchemaItem<T> {
    fn create() -> Box<dyn ISchemaItem> {
        Box::<SchemaItem<T>>::default() as _
    }
}

impl<T: JsonSchema> ISchemaItem for SchemaItem<T> {
    fn name(&self) -> String {
        T::schema_name()
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
    fn gen(&self) -> RootSchema {
        let gen: SchemaGenerator = SchemaSettings::draft07()
            .with(|s| {
                s.option_add_null_type = false;
            })
            .into();
        gen.into_root_schema_for::<T>()
    }
}

// -----------------------------------------------------------------------------
// get_schema_items
// -----------------------------------------------------------------------------
fn get_schema_items() -> Vec<Box<dyn ISchemaItem>> {
    vec![
        SchemaItem::<hholiday::Holiday>::create(),
        SchemaItem::<hchrono::grid::CalendarDay>::create(),
        SchemaItem::<hholiday::listing::HolidayFilter>::create(),
        SchemaItem::<hholiday::listing::HolidayStats>::create(),
        SchemaItem::<hholiday::month::PreviewConfig>::create(),
        SchemaItem::<hholiday::store::StoredHoliday>::create(),
    ]
}
