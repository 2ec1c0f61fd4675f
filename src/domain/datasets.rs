//! Dataset types known to the builtin registry.
//!
//! Each is a zero-sized handle standing in for the dataset-constructing type
//! of the training code; it carries nothing but its registry key.

use super::DatasetKind;

macro_rules! dataset_kinds {
    ($($(#[$meta:meta])* $name:ident => $id:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl DatasetKind for $name {
                const ID: &'static str = $id;
            }
        )*

        /// Registry keys of every builtin dataset type.
        pub const BUILTIN_IDS: &[&str] = &[$($id),*];
    };
}

dataset_kinds! {
    Mnist => "mnist",
    FashionMnist => "fashion_mnist",
    Kmnist => "kmnist",
    Emnist => "emnist",
    Qmnist => "qmnist",
    Cifar10 => "cifar10",
    Cifar100 => "cifar100",
    Stl10 => "stl10",
    Svhn => "svhn",
    Caltech101 => "caltech101",
    Caltech256 => "caltech256",
    CelebA => "celeba",
    Cityscapes => "cityscapes",
    /// ILSVRC 2012 archives, extracted by the loader.
    ImageNet => "imagenet",
    /// COCO 2017 detection split.
    CocoDetection => "coco_detection",
}
