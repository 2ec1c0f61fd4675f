use std::sync::LazyLock;

use super::datasets::{
    Caltech101, Caltech256, CelebA, Cifar10, Cifar100, Cityscapes, CocoDetection, Emnist,
    FashionMnist, ImageNet, Kmnist, Mnist, Qmnist, Stl10, Svhn,
};
use super::{Cluster, DatasetId, DatasetKind, DatasetRegistry, RegistryBuilder};

const MILA_TORCHVISION: &str = "/network/datasets/torchvision";
const CURATED: &str = "/project/rpp-bengioy/data/curated";

/// Compute Canada clusters sharing the curated project space.
const DRAC: [Cluster; 4] = [Cluster::Beluga, Cluster::Cedar, Cluster::Graham, Cluster::Narval];

static BUILTIN: LazyLock<DatasetRegistry> = LazyLock::new(build);

pub(crate) fn registry() -> &'static DatasetRegistry {
    &BUILTIN
}

fn curated(name: &str) -> String {
    format!("{}/{}", CURATED, name)
}

fn on_drac<D: DatasetKind>(builder: RegistryBuilder, root: String) -> RegistryBuilder {
    builder.roots(DatasetId::of::<D>(), &DRAC, root)
}

fn build() -> DatasetRegistry {
    let builder = DatasetRegistry::builder()
        .kind_files::<Mnist, _, _>(["MNIST"])
        .kind_files::<FashionMnist, _, _>(["FashionMNIST"])
        .kind_files::<Kmnist, _, _>(["KMNIST"])
        .kind_files::<Emnist, _, _>(["EMNIST"])
        .kind_files::<Qmnist, _, _>(["QMNIST"])
        .kind_files::<Cifar10, _, _>(["cifar-10-batches-py"])
        .kind_files::<Cifar100, _, _>(["cifar-100-python"])
        .kind_files::<Stl10, _, _>(["stl10_binary"])
        .kind_files::<Svhn, _, _>(["train_32x32.mat", "test_32x32.mat", "extra_32x32.mat"])
        .kind_files::<Caltech101, _, _>(["caltech101"])
        .kind_files::<Caltech256, _, _>(["caltech256"])
        .kind_files::<CelebA, _, _>(["celeba"])
        .kind_files::<Cityscapes, _, _>(["leftImg8bit", "gtFine"])
        .kind_files::<ImageNet, _, _>([
            "ILSVRC2012_devkit_t12.tar.gz",
            "ILSVRC2012_img_train.tar",
            "ILSVRC2012_img_val.tar",
        ])
        .kind_files::<CocoDetection, _, _>(["train2017", "val2017", "annotations"]);

    let builder = builder
        .kind_root::<Mnist>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<FashionMnist>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<Kmnist>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<Emnist>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<Qmnist>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<Cifar10>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<Cifar100>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<Stl10>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<Svhn>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<Caltech101>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<Caltech256>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<CelebA>(Cluster::Mila, MILA_TORCHVISION)
        .kind_root::<Cityscapes>(Cluster::Mila, "/network/datasets/cityscapes.var/cityscapes_torchvision")
        .kind_root::<ImageNet>(Cluster::Mila, "/network/datasets/imagenet")
        .kind_root::<CocoDetection>(Cluster::Mila, "/network/datasets/coco/2017");

    let builder = on_drac::<Mnist>(builder, curated("mnist"));
    let builder = on_drac::<Cifar10>(builder, curated("cifar10"));
    let builder = on_drac::<Cifar100>(builder, curated("cifar100"));
    let builder = on_drac::<ImageNet>(builder, curated("imagenet"));
    let builder = on_drac::<CocoDetection>(builder, curated("coco/2017"));

    builder.build()
}
