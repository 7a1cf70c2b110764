//! Sum-type path: a record builder per case, an umbrella builder holding a
//! selector over them.

use kiln_ir::{to_snake_case, SumModel};

use crate::plan::{CaseBuilder, SumBuilder, Target};
use crate::record::fields_builder;
use crate::GenConfig;

pub(crate) fn sum_builder(model: &SumModel, config: &GenConfig) -> SumBuilder {
    let cases = model
        .cases
        .iter()
        .map(|case| {
            let accessor = to_snake_case(&case.name);
            let builder = fields_builder(
                Target::Case {
                    sum: model.name.clone(),
                    case: case.name.clone(),
                },
                config.case_builder_name(&model.name, &case.name),
                &case.fields,
                &[],
            );
            CaseBuilder {
                case: case.name.clone(),
                replacer: format!("set_{accessor}"),
                accessor,
                builder,
            }
        })
        .collect();

    SumBuilder {
        target: model.name.clone(),
        builder_name: config.builder_name(&model.name),
        selector_name: config.selector_name(&model.name),
        cases,
    }
}
