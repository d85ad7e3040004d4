use stipula::error::ValidationError;
use stipula::parameter::{Checkable, Parameter, ParameterController};
use stipula::store::{ParameterStore, ValueStore};

fn controller_with_range_param() -> ParameterController {
    let mut controller = ParameterController::new();
    controller.declare::<i64>("range_param").check_range(0, 100);
    controller
}

#[test]
fn out_of_range_value_fails_the_pass() {
    let controller = controller_with_range_param();
    let mut store = ParameterStore::new();
    store.insert("range_param", 150i64);
    let err = controller.validate(&mut store).unwrap_err();
    assert_eq!(
        err,
        ValidationError::OutOfRange {
            parameter: "range_param".to_owned()
        }
    );
}

#[test]
fn in_range_value_passes_and_leaves_the_store_unchanged() {
    let controller = controller_with_range_param();
    let mut store = ParameterStore::new();
    store.insert("range_param", 50i64);
    controller.validate(&mut store).expect("50 lies within [0, 100]");
    assert_eq!(store.len(), 1);
    assert_eq!(*store.get::<i64>("range_param").unwrap(), 50);
}

#[test]
fn default_param_is_filled_into_an_empty_store() {
    let mut controller = ParameterController::new();
    controller.declare::<i64>("default_param").set_default(42);
    let mut store = ParameterStore::new();
    controller.validate(&mut store).unwrap();
    assert_eq!(*store.get::<i64>("default_param").unwrap(), 42);
}

#[test]
fn lookup_finds_declared_parameters_only() {
    let mut controller: ParameterController = ParameterController::new();
    controller.declare::<i64>("known");
    assert_eq!(controller.lookup("known").unwrap().name(), "known");
    let err = controller.lookup("unknown").unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownParameter {
            parameter: "unknown".to_owned()
        }
    );
}

#[test]
fn lookup_result_downcasts_to_the_declared_type() {
    let mut controller: ParameterController = ParameterController::new();
    controller.declare::<i64>("typed");
    let erased = controller.lookup("typed").unwrap();
    let typed = erased.as_any().downcast_ref::<Parameter<i64>>().unwrap();
    assert_eq!(typed.name(), "typed");
    assert!(erased.as_any().downcast_ref::<Parameter<f64>>().is_none());
}

#[test]
fn redeclaring_a_name_replaces_the_earlier_declaration() {
    let mut controller = ParameterController::new();
    controller.declare::<i64>("flexible").is_required();
    // the replacement carries no checks, so the old required check is gone
    controller.declare::<String>("flexible");
    assert_eq!(controller.len(), 1);
    let mut store = ParameterStore::new();
    controller.validate(&mut store).expect("replacement dropped the required check");
}

#[test]
fn absorbing_into_an_empty_controller_adopts_wholesale() {
    let mut absorbed = ParameterController::new();
    absorbed.declare::<i64>("alpha").set_default(1);
    absorbed.declare::<i64>("beta").set_default(2);
    let mut controller = ParameterController::new();
    controller.absorb(absorbed);
    assert_eq!(controller.len(), 2);
    let mut store = ParameterStore::new();
    controller.validate(&mut store).unwrap();
    assert_eq!(*store.get::<i64>("alpha").unwrap(), 1);
    assert_eq!(*store.get::<i64>("beta").unwrap(), 2);
}

#[test]
fn absorbing_into_a_non_empty_controller_overwrites_same_named_entries() {
    let mut controller = ParameterController::new();
    controller.declare::<i64>("shared").is_required();
    controller.declare::<i64>("only_here").set_default(1);
    let mut absorbed = ParameterController::new();
    absorbed.declare::<i64>("shared").set_default(7);
    controller.absorb(absorbed);
    assert_eq!(controller.len(), 2, "unrelated declarations must survive the merge");
    // the incoming declaration replaced the required check with a default,
    // so an empty store now validates
    let mut store = ParameterStore::new();
    controller.validate(&mut store).unwrap();
    assert_eq!(*store.get::<i64>("shared").unwrap(), 7);
    assert_eq!(*store.get::<i64>("only_here").unwrap(), 1);
}

#[test]
fn validation_failure_anywhere_aborts_the_pass() {
    let mut controller = ParameterController::new();
    controller.declare::<i64>("present").set_default(1);
    controller.declare::<i64>("absent").is_required();
    let mut store = ParameterStore::new();
    store.insert("present", 5i64);
    let err = controller.validate(&mut store).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingParameter {
            parameter: "absent".to_owned()
        }
    );
}
