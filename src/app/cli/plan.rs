use super::ParamArgs;
use crate::app::api::{self, PlanFormat};
use crate::domain::AppError;

pub(super) fn run_plan(params: &ParamArgs, format: PlanFormat) -> Result<(), AppError> {
    let plan = api::plan(&params.root, &params.load()?)?;
    print!("{}", plan.render(format)?);
    Ok(())
}
