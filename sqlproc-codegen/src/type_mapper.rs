use sqlproc_core::ParamType;

/// Maps declared parameter types to types of the target language.
pub trait TypeMapper {
    /// Map a declared parameter type to a type expression
    fn map_param_type(&self, ty: ParamType) -> &'static str;

    /// Type of a slot that has no declaration
    fn unknown_type(&self) -> &'static str;

    /// Map a parameter type that also accepts null
    fn map_optional_type(&self, ty: &str) -> String {
        format!("{ty} | null")
    }

    /// Resolve the type of an argument slot.
    fn map_slot_type(&self, ty: Option<ParamType>, optional: bool) -> String {
        let base = ty.map_or(self.unknown_type(), |ty| self.map_param_type(ty));
        if optional {
            self.map_optional_type(base)
        } else {
            base.to_string()
        }
    }
}
