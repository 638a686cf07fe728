use brackets::vm::value::Value;
pub use brackets::vm::Error;
pub use brackets::vm::Result;
use brackets::vm::{Setting, Settings, VM};

pub fn run_code(vm: &mut VM, code: &str) -> Result<Value> {
    vm.run_string(code)
}

pub fn assert_result_eq(vm: &mut VM, code: &str, expected: Value) {
    assert_eq!(run_code(vm, code).unwrap(), expected)
}

/// A VM that evaluates dictionary literals without rewriting them
pub fn native_vm() -> VM {
    let mut settings = Settings::default();
    settings.disable(Setting::Desugar);
    VM::with_settings(settings)
}
