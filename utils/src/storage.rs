// Storage accessor generators. Callers bring `paste`, `bump_instance`/`bump_persistent`,
// `panic_with_error` and `StorageError` into scope.

#[macro_export]
macro_rules! generate_instance_storage_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub fn [<set_ $attr_name>](e: &Env, $attr_name: &$data_type) {
                bump_instance(e);
                e.storage()
                    .instance()
                    .set(&$key, $attr_name)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                let value_result = e.storage().instance().get(&$key);
                match value_result {
                    Some(value) => value,
                    None => {
                        panic_with_error!(e, StorageError::ValueNotInitialized)
                    }
                }
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_with_default {
    ($attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                e.storage().instance().get(&$key).unwrap_or($default)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        generate_instance_storage_getter!($attr_name, $key, $data_type);
        generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter_with_default {
    ($attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        generate_instance_storage_getter_with_default!($attr_name, $key, $data_type, $default);
        generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}

// Keyed persistent entries: `$key_variant` is a single-field DataKey constructor.
#[macro_export]
macro_rules! generate_persistent_storage_setter {
    ($attr_name:ident, $key_variant:path, $key_type:ty, $data_type:ty) => {
        paste! {
            pub fn [<set_ $attr_name>](e: &Env, key: &$key_type, $attr_name: &$data_type) {
                let key = $key_variant(key.clone());
                e.storage().persistent().set(&key, $attr_name);
                bump_persistent(e, &key);
            }
        }
    };
}

#[macro_export]
macro_rules! generate_persistent_storage_getter_with_default {
    ($attr_name:ident, $key_variant:path, $key_type:ty, $data_type:ty, $default:expr) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env, key: &$key_type) -> $data_type {
                let key = $key_variant(key.clone());
                match e.storage().persistent().get(&key) {
                    Some(value) => {
                        bump_persistent(e, &key);
                        value
                    }
                    None => $default,
                }
            }
        }
    };
}

#[macro_export]
macro_rules! generate_persistent_storage_getter_and_setter_with_default {
    ($attr_name:ident, $key_variant:path, $key_type:ty, $data_type:ty, $default:expr) => {
        generate_persistent_storage_getter_with_default!(
            $attr_name,
            $key_variant,
            $key_type,
            $data_type,
            $default
        );
        generate_persistent_storage_setter!($attr_name, $key_variant, $key_type, $data_type);
    };
}
