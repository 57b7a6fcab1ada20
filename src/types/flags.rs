//! Bitfield types.

use crate::ffi;

bitflags! {
    /// cl_device_type
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DeviceType: u64 {
        const DEFAULT = ffi::CL_DEVICE_TYPE_DEFAULT;
        const CPU = ffi::CL_DEVICE_TYPE_CPU;
        const GPU = ffi::CL_DEVICE_TYPE_GPU;
        const ACCELERATOR = ffi::CL_DEVICE_TYPE_ACCELERATOR;
        const CUSTOM = ffi::CL_DEVICE_TYPE_CUSTOM;
        const ALL = ffi::CL_DEVICE_TYPE_ALL;
    }
}

impl DeviceType {
    /// Parses one of `DEFAULT`, `CPU`, `GPU`, `ACCELERATOR`, `CUSTOM` or
    /// `ALL` (case insensitive).
    pub fn from_env_name(name: &str) -> Option<DeviceType> {
        match name.trim().to_uppercase().as_str() {
            "DEFAULT" => Some(DeviceType::DEFAULT),
            "CPU" => Some(DeviceType::CPU),
            "GPU" => Some(DeviceType::GPU),
            "ACCELERATOR" => Some(DeviceType::ACCELERATOR),
            "CUSTOM" => Some(DeviceType::CUSTOM),
            "ALL" => Some(DeviceType::ALL),
            _ => None,
        }
    }
}

bitflags! {
    /// cl_mem_flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct MemFlags: u64 {
        const READ_WRITE = ffi::CL_MEM_READ_WRITE;
        const WRITE_ONLY = ffi::CL_MEM_WRITE_ONLY;
        const READ_ONLY = ffi::CL_MEM_READ_ONLY;
        const USE_HOST_PTR = ffi::CL_MEM_USE_HOST_PTR;
        const ALLOC_HOST_PTR = ffi::CL_MEM_ALLOC_HOST_PTR;
        const COPY_HOST_PTR = ffi::CL_MEM_COPY_HOST_PTR;
        const HOST_WRITE_ONLY = ffi::CL_MEM_HOST_WRITE_ONLY;
        const HOST_READ_ONLY = ffi::CL_MEM_HOST_READ_ONLY;
        const HOST_NO_ACCESS = ffi::CL_MEM_HOST_NO_ACCESS;
        const SVM_FINE_GRAIN_BUFFER = ffi::CL_MEM_SVM_FINE_GRAIN_BUFFER;
        const SVM_ATOMICS = ffi::CL_MEM_SVM_ATOMICS;
        const KERNEL_READ_AND_WRITE = ffi::CL_MEM_KERNEL_READ_AND_WRITE;
    }
}

impl Default for MemFlags {
    fn default() -> MemFlags {
        MemFlags::READ_WRITE
    }
}

bitflags! {
    /// cl_map_flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct MapFlags: u64 {
        const READ = ffi::CL_MAP_READ;
        const WRITE = ffi::CL_MAP_WRITE;
        const WRITE_INVALIDATE_REGION = ffi::CL_MAP_WRITE_INVALIDATE_REGION;
    }
}

bitflags! {
    /// cl_command_queue_properties
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct CommandQueueProperties: u64 {
        const OUT_OF_ORDER_EXEC_MODE_ENABLE = ffi::CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE;
        const PROFILING_ENABLE = ffi::CL_QUEUE_PROFILING_ENABLE;
        const ON_DEVICE = ffi::CL_QUEUE_ON_DEVICE;
        const ON_DEVICE_DEFAULT = ffi::CL_QUEUE_ON_DEVICE_DEFAULT;
    }
}

bitflags! {
    /// cl_mem_migration_flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct MemMigrationFlags: u64 {
        const HOST = ffi::CL_MIGRATE_MEM_OBJECT_HOST;
        const CONTENT_UNDEFINED = ffi::CL_MIGRATE_MEM_OBJECT_CONTENT_UNDEFINED;
    }
}
